// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded-wait helpers for asynchronous hand-off tests.
//!
//! The publishers provide no timeout of their own; tests that let a
//! producer conclude from another execution context block on a channel
//! written from inside the consumer, with a bound so a lost signal fails
//! the test instead of hanging it.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Receives one message, panicking if `timeout_ms` elapses first.
pub fn expect_recv<T>(rx: &Receiver<T>, timeout_ms: u64) -> T {
    rx.recv_timeout(Duration::from_millis(timeout_ms))
        .expect("timed out waiting for a signal from the execution context")
}

/// Asserts that nothing arrives within `timeout_ms`.
pub fn assert_no_recv<T>(rx: &Receiver<T>, timeout_ms: u64) {
    match rx.recv_timeout(Duration::from_millis(timeout_ms)) {
        Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {}
        Ok(_) => panic!("unexpected signal emitted, expected none"),
    }
}
