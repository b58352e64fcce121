// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use monoflux_core::MonofluxError;

/// Simple error fixture for fault-path tests.
#[derive(Debug, thiserror::Error)]
#[error("Test error: {0}")]
pub struct TestError(pub String);

impl TestError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Wraps the fixture as the opaque fault type carried by the protocol.
    pub fn fault(msg: impl Into<String>) -> MonofluxError {
        MonofluxError::user_error(Self::new(msg))
    }
}
