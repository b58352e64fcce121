// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use monoflux_core::{BoxSubscriber, MonoSink, MonofluxError, Subscriber};

use crate::map::MapMono;
use crate::on_error_resume::ResumeMono;
use crate::source::SourceMono;
use crate::subscribe::ConsumerSubscriber;

/// Stage capability: run one independent execution of the chain for the
/// given subscriber.
///
/// Implemented by the closed set of stage kinds: source, map and
/// error-recovery. The set is fixed; external code composes publishers
/// through [`Mono`]'s operators instead of implementing this trait.
pub(crate) trait RawMono<T>: Send + Sync {
    fn subscribe_raw(&self, subscriber: BoxSubscriber<T>);
}

/// A lazily-evaluated description of how to produce at most one value.
///
/// Composing a `Mono` performs no work: `create`, [`map`](Mono::map) and
/// [`on_error_resume`](Mono::on_error_resume) only build immutable
/// composition nodes. Only [`subscribe`](Mono::subscribe) (or
/// [`subscribe_with`](Mono::subscribe_with)) triggers the chain, and each
/// call triggers it afresh: subscribing N times runs the leaf producer N
/// independent times, with no state shared between the executions.
///
/// `subscribe` runs on the calling thread up through the producer
/// invocation. If the producer moves its sink to another execution
/// context, the terminal signal is delivered on that context instead; the
/// library itself never schedules anything.
///
/// Cloning a `Mono` clones the handle, not the execution: both handles
/// describe the same chain.
///
/// # Examples
///
/// ```
/// use monoflux_mono::Mono;
///
/// let mono = Mono::create(|sink| sink.success(21)).map(|v| v * 2);
/// mono.subscribe(|v| assert_eq!(v, 42));
/// // Same chain, fresh execution:
/// mono.subscribe(|v| assert_eq!(v, 42));
/// ```
pub struct Mono<T> {
    stage: Arc<dyn RawMono<T>>,
}

impl<T> Clone for Mono<T> {
    fn clone(&self) -> Self {
        Self {
            stage: Arc::clone(&self.stage),
        }
    }
}

impl<T: Send + 'static> Mono<T> {
    pub(crate) fn from_stage(stage: Arc<dyn RawMono<T>>) -> Self {
        Self { stage }
    }

    /// Creates a publisher from a producer function.
    ///
    /// The producer is stored, not invoked; each subscription invokes it
    /// exactly once with a fresh [`MonoSink`]. The producer concludes by
    /// calling [`MonoSink::success`] or [`MonoSink::error`], on the
    /// subscribing thread or on any execution context it moved the sink
    /// to. Faults are expected to go through the sink; a panicking
    /// producer is not converted into an `on_error` signal and unwinds
    /// out of whichever context ran it.
    pub fn create<F>(producer: F) -> Self
    where
        F: Fn(MonoSink<T>) + Send + Sync + 'static,
    {
        Self::from_stage(Arc::new(SourceMono::new(producer)))
    }

    /// Creates a publisher that succeeds with a clone of `value` on every
    /// subscription.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::create(move |sink| sink.success(value.clone()))
    }

    /// Creates a publisher that fails with a clone of `error` on every
    /// subscription.
    pub fn error(error: MonofluxError) -> Self {
        Self::create(move |sink| sink.error(error.clone()))
    }

    /// Returns a publisher applying `transform` to the produced value.
    ///
    /// Lazy like everything else: the transform runs once per
    /// subscription, at the moment the upstream value arrives, on the
    /// thread that delivered it. Upstream faults and completion pass
    /// through the stage untouched, so a recovery operator downstream of
    /// a `map` still sees the fault.
    ///
    /// The transform is infallible by signature. A panicking transform is
    /// not converted into an `on_error` signal; it unwinds the delivery
    /// stack of whichever context invoked the sink. Fallible work belongs
    /// in the producer, which can report through [`MonoSink::error`].
    pub fn map<O, F>(self, transform: F) -> Mono<O>
    where
        O: Send + 'static,
        F: Fn(T) -> O + Send + Sync + 'static,
    {
        Mono::from_stage(Arc::new(MapMono::new(self, transform)))
    }

    /// Returns a publisher that switches to a replacement chain on fault.
    ///
    /// Values and completion pass through unchanged. When the upstream
    /// signals a fault, `handler` is invoked with it and the original
    /// downstream subscriber is subscribed to the returned replacement
    /// publisher. At most one of the upstream's value path and the
    /// replacement's value path ever reaches the subscriber.
    ///
    /// Recovery is not itself recoverable here: a panicking handler
    /// unwinds to the context that delivered the fault.
    ///
    /// ```
    /// use monoflux_core::MonofluxError;
    /// use monoflux_mono::Mono;
    ///
    /// let mono = Mono::create(|sink| sink.error(MonofluxError::production_error("down")))
    ///     .on_error_resume(|_fault| Mono::just("fallback"));
    /// mono.subscribe(|v| assert_eq!(v, "fallback"));
    /// ```
    pub fn on_error_resume<H>(self, handler: H) -> Mono<T>
    where
        H: Fn(MonofluxError) -> Mono<T> + Send + Sync + 'static,
    {
        Self::from_stage(Arc::new(ResumeMono::new(self, handler)))
    }

    /// Subscribes with the full protocol receiver.
    ///
    /// This is the primitive subscription form; per-subscription fault
    /// handling lives in the subscriber's `on_error`.
    pub fn subscribe_with<S>(&self, subscriber: S)
    where
        S: Subscriber<T> + Send + 'static,
    {
        self.subscribe_boxed(Box::new(subscriber));
    }

    /// Subscribes with a plain value consumer.
    ///
    /// Adapts the consumer through [`ConsumerSubscriber`]: values reach
    /// the consumer, while a fault arriving with no recovery stage left is
    /// reported to the diagnostic log and contained, never unwound back
    /// into the producing context.
    pub fn subscribe<C>(&self, consumer: C)
    where
        C: FnMut(T) + Send + 'static,
    {
        self.subscribe_with(ConsumerSubscriber::new(consumer));
    }

    pub(crate) fn subscribe_boxed(&self, subscriber: BoxSubscriber<T>) {
        self.stage.subscribe_raw(subscriber);
    }
}
