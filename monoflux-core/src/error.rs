// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Monoflux publisher library.
//!
//! Faults travelling through the subscriber protocol are untyped from the
//! protocol's point of view: every stage hands them on as an opaque
//! [`MonofluxError`] value. The enum distinguishes how a fault entered the
//! system, not what went wrong inside user code.
//!
//! # Examples
//!
//! ```
//! use monoflux_core::{MonofluxError, Result};
//!
//! fn produce() -> Result<String> {
//!     Err(MonofluxError::production_error("backend unavailable"))
//! }
//! ```

/// Root error type carried through the `on_error` channel.
#[derive(Debug, thiserror::Error)]
pub enum MonofluxError {
    /// Production failed with a plain description.
    ///
    /// Used for faults described by the producer itself rather than by a
    /// wrapped error value.
    #[error("Production error: {context}")]
    ProductionError {
        /// Description of what went wrong while producing the value
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by producer functions and other user-supplied
    /// callbacks so they can travel the subscriber protocol unchanged.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MonofluxError {
    /// Create a production error with the given context
    pub fn production_error(context: impl Into<String>) -> Self {
        Self::ProductionError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for Monoflux operations
///
/// Producers typically build one of these from fallible work and report it
/// through the sink.
pub type Result<T> = std::result::Result<T, MonofluxError>;

/// Extension trait for converting errors into [`MonofluxError`]
///
/// Automatically implemented for all types implementing
/// `std::error::Error + Send + Sync + 'static`.
pub trait IntoMonofluxError {
    /// Convert this error into a [`MonofluxError`]
    fn into_monoflux(self) -> MonofluxError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoMonofluxError for E {
    fn into_monoflux(self) -> MonofluxError {
        MonofluxError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s in a fluent style.
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(MonofluxError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<MonofluxError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                MonofluxError::UserError(inner) => MonofluxError::ProductionError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}

impl Clone for MonofluxError {
    fn clone(&self) -> Self {
        match self {
            Self::ProductionError { context } => Self::ProductionError {
                context: context.clone(),
            },
            // The boxed error cannot be cloned; fall back to its rendering
            Self::UserError(e) => Self::ProductionError {
                context: format!("User error: {}", e),
            },
        }
    }
}
