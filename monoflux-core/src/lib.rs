// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Protocol and error types for the Monoflux deferred single-value
//! publishers.
//!
//! This crate holds the pieces shared by every publisher stage: the
//! [`Subscriber`] protocol, the [`MonoSink`] capability handed to producer
//! functions, the [`MonofluxError`] fault type and the [`MonoItem`]
//! terminal-signal enum. The publisher stages themselves live in
//! `monoflux-mono`.

pub mod error;
pub mod mono_item;
pub mod sink;
pub mod subscriber;

pub use self::error::{IntoMonofluxError, MonofluxError, Result, ResultExt};
pub use self::mono_item::MonoItem;
pub use self::sink::MonoSink;
pub use self::subscriber::{BoxSubscriber, Subscriber};
