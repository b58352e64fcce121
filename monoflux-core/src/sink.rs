// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::MonofluxError;
use crate::subscriber::BoxSubscriber;

/// Capability handed to a producer function for concluding one
/// subscription.
///
/// Both reporting methods consume the sink, so a producer can signal at
/// most once: success or failure, never both. Dropping the sink without
/// calling either leaves the subscriber without any terminal signal, which
/// the protocol permits: production that never concludes is the producer's
/// choice, and bounding the wait is the caller's business.
///
/// The sink is `Send` whenever `T` is, so a producer may move it into
/// another execution context and conclude from there:
///
/// ```
/// use monoflux_core::MonoSink;
///
/// fn produce(sink: MonoSink<u32>) {
///     std::thread::spawn(move || sink.success(42));
/// }
/// ```
pub struct MonoSink<T> {
    subscriber: BoxSubscriber<T>,
}

impl<T> MonoSink<T> {
    /// Wraps the downstream subscriber of one subscription.
    ///
    /// Source stages call this once per `subscribe`; each producer
    /// invocation sees a sink of its own.
    pub fn new(subscriber: BoxSubscriber<T>) -> Self {
        Self { subscriber }
    }

    /// Reports the produced value.
    pub fn success(mut self, value: T) {
        self.subscriber.on_value(value);
    }

    /// Reports the fault that ended production.
    pub fn error(mut self, error: MonofluxError) {
        self.subscriber.on_error(error);
    }
}
