//! Trait definitions for typed consumers of the fetch utility.
//!
//! A shape that implements [`Load`] knows how to retrieve itself through a
//! [`FetchClient`](crate::FetchClient) and convert at the point of use.

mod load;

pub use load::Load;
