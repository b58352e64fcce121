// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred single-value publishers.
//!
//! A [`Mono`] describes how at most one value will eventually be produced.
//! Nothing runs at composition time; every call to `subscribe` starts a
//! fresh, independent execution of the whole chain. Two variants exist:
//!
//! - [`Mono`]: the error-aware publisher with the full subscriber
//!   protocol, `map` and `on_error_resume`.
//! - [`PlainMono`]: the value-only sibling without a fault channel.
//!
//! ```
//! use monoflux_mono::Mono;
//!
//! let mono = Mono::create(|sink| sink.success("good")).map(|v| format!("{v}_mod"));
//! mono.subscribe(|v| assert_eq!(v, "good_mod"));
//! ```

mod logging;

pub mod map;
pub mod mono;
pub mod on_error_resume;
pub mod plain;
pub mod source;
pub mod subscribe;

pub use self::mono::Mono;
pub use self::plain::{PlainMono, PlainSink};
pub use self::subscribe::ConsumerSubscriber;
