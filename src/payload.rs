//! Parsed-but-unchecked payloads.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, RosterError};

/// A JSON value fetched on behalf of a caller expecting shape `T`.
///
/// The fetch boundary only guarantees that the body was valid JSON. `T` is
/// a promise from the caller, not something checked on arrival: conversion
/// happens in [`decode`](Self::decode) or [`into_typed`](Self::into_typed),
/// and a mismatch surfaces there as [`RosterError::ShapeMismatch`].
pub struct Payload<T> {
    value: Value,
    _shape: PhantomData<fn() -> T>,
}

impl<T> Payload<T> {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            _shape: PhantomData,
        }
    }

    /// The raw parsed JSON.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the payload, returning the raw parsed JSON.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Look up a nested value by JSON pointer (e.g. `/info/seed`).
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.value.pointer(pointer)
    }
}

impl<T: DeserializeOwned> Payload<T> {
    /// Convert a copy of the payload into `T`, leaving the raw value intact.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ShapeMismatch`] if the JSON lacks a field `T`
    /// requires or carries one with the wrong primitive type.
    pub fn decode(&self) -> Result<T> {
        decode_as(self.value.clone())
    }

    /// Convert the payload into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn into_typed(self) -> Result<T> {
        decode_as(self.value)
    }
}

impl<T> Payload<T> {
    /// Decode the whole payload into a different shape `U`, typically a
    /// narrower one that reads only some fields.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ShapeMismatch`] if the JSON does not fit `U`.
    pub fn project<U: DeserializeOwned>(&self) -> Result<U> {
        decode_as(self.value.clone())
    }

    /// Decode only the value at `pointer` into `U`, ignoring the rest of the
    /// payload.
    ///
    /// Returns `None` if nothing lives at `pointer`.
    pub fn decode_at<U: DeserializeOwned>(&self, pointer: &str) -> Option<Result<U>> {
        self.value.pointer(pointer).cloned().map(decode_as)
    }
}

fn decode_as<U: DeserializeOwned>(value: Value) -> Result<U> {
    serde_json::from_value(value).map_err(|source| RosterError::ShapeMismatch {
        shape: type_name::<U>(),
        source,
    })
}

impl<T> Clone for Payload<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> fmt::Debug for Payload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("shape", &type_name::<T>())
            .field("value", &self.value)
            .finish()
    }
}
