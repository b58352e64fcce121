// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::MonofluxError;

/// Terminal signal of one subscription: either the produced value or the
/// fault that ended production.
///
/// Adapters and test probes use this to carry the outcome of a
/// subscription as a plain value instead of a pair of callbacks.
#[derive(Debug, Clone)]
pub enum MonoItem<T> {
    /// The produced value
    Value(T),
    /// The fault that ended production
    Error(MonofluxError),
}

impl<T: PartialEq> PartialEq for MonoItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MonoItem::Value(a), MonoItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T: Eq> Eq for MonoItem<T> {}

impl<T> MonoItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, MonoItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, MonoItem::Error(_))
    }

    /// Converts from `MonoItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            MonoItem::Value(v) => Some(v),
            MonoItem::Error(_) => None,
        }
    }

    /// Converts from `MonoItem<T>` to `Option<MonofluxError>`, discarding values.
    pub fn err(self) -> Option<MonofluxError> {
        match self {
            MonoItem::Value(_) => None,
            MonoItem::Error(e) => Some(e),
        }
    }

    /// Maps a `MonoItem<T>` to `MonoItem<U>` by applying a function to the
    /// contained value.
    ///
    /// Errors are passed through unchanged.
    pub fn map<U, F>(self, f: F) -> MonoItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            MonoItem::Value(v) => MonoItem::Value(f(v)),
            MonoItem::Error(e) => MonoItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            MonoItem::Value(v) => v,
            MonoItem::Error(e) => {
                panic!("called `MonoItem::unwrap()` on an `Error` value: {:?}", e)
            }
        }
    }
}

impl<T> From<Result<T, MonofluxError>> for MonoItem<T> {
    fn from(result: Result<T, MonofluxError>) -> Self {
        match result {
            Ok(v) => MonoItem::Value(v),
            Err(e) => MonoItem::Error(e),
        }
    }
}

impl<T> From<MonoItem<T>> for Result<T, MonofluxError> {
    fn from(item: MonoItem<T>) -> Self {
        match item {
            MonoItem::Value(v) => Ok(v),
            MonoItem::Error(e) => Err(e),
        }
    }
}
