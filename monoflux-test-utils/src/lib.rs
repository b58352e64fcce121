// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Monoflux publisher library.
//!
//! Provides the probe infrastructure used to assert on subscriber-protocol
//! signals, a simple error fixture, and bounded-wait helpers for tests
//! where a producer hands the sink to another execution context. For
//! development and testing only, not for production code.
//!
//! # Probing a subscription
//!
//! `subscribe_with` consumes its subscriber, so the probe comes in two
//! halves: a [`ProbeSubscriber`] to hand to the publisher and a
//! [`ProbeHandle`] that keeps reading the recorded signals afterwards.
//!
//! ```
//! use monoflux_core::Subscriber;
//! use monoflux_test_utils::probe;
//!
//! let (mut subscriber, handle) = probe::<u32>();
//! subscriber.on_value(42);
//! assert_eq!(handle.values(), vec![42]);
//! ```

pub mod helpers;
pub mod probe;
pub mod test_error;

pub use self::helpers::{assert_no_recv, expect_recv};
pub use self::probe::{probe, ProbeHandle, ProbeSubscriber};
pub use self::test_error::TestError;
