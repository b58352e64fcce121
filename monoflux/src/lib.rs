// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Monoflux
//!
//! A deferred single-value publisher library: a [`Mono`] describes how at
//! most one value will eventually be produced, possibly on another
//! execution context, without running anything until a consumer
//! subscribes. Transformations ([`Mono::map`]) and error recovery
//! ([`Mono::on_error_resume`]) compose lazily over the deferred value.
//!
//! ## Design
//!
//! - **Lazy and re-runnable**: composition allocates immutable nodes
//!   only; every `subscribe` call runs the chain afresh, so the same
//!   composed publisher can be subscribed any number of times,
//!   concurrently, with fully independent executions.
//! - **Execution-context agnostic**: the library never schedules.
//!   `subscribe` runs on the calling thread up through the leaf producer;
//!   if the producer moves its [`MonoSink`] to a thread or task, the
//!   terminal signal is delivered there.
//! - **Explicit fault channel**: faults travel as opaque
//!   [`MonofluxError`] values through the [`Subscriber`] protocol. A
//!   fault reaching a plain-consumer subscription with no recovery stage
//!   left is logged and contained, never unwound into the producer.
//!
//! ## Quick Start
//!
//! ```
//! use monoflux::Mono;
//!
//! let greeting = Mono::create(|sink| sink.success("good"))
//!     .map(|v| format!("{v}_mod"));
//!
//! greeting.subscribe(|v| assert_eq!(v, "good_mod"));
//! ```

// Re-export protocol and error types
pub use monoflux_core::{
    BoxSubscriber, IntoMonofluxError, MonoItem, MonoSink, MonofluxError, Result, ResultExt,
    Subscriber,
};

// Re-export the publisher types
pub use monoflux_mono::{ConsumerSubscriber, Mono, PlainMono, PlainSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use monoflux_core::{MonoItem, MonoSink, MonofluxError, Subscriber};
    pub use monoflux_mono::{Mono, PlainMono};
}
