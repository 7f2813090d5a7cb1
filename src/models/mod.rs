//! Response data contract.

mod envelope;
mod record;

pub use envelope::*;
pub use record::*;
