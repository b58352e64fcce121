// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value-only publisher variant without the subscriber protocol.
//!
//! [`PlainMono`] is the smaller sibling of [`Mono`](crate::Mono): there is
//! no fault channel, subscribers are plain consumers, and [`PlainSink`]
//! can only report success. A producer that panics is not caught; the
//! panic unwinds out of whichever context invoked the producer, which for
//! a synchronous producer is the `subscribe` call itself. Use
//! [`Mono`](crate::Mono) when failures must travel to the subscriber.

use std::marker::PhantomData;
use std::sync::Arc;

/// Consumer handed between plain stages.
type BoxConsumer<T> = Box<dyn FnMut(T) + Send>;

/// Stage capability of the value-only variant; a closed set of stage
/// kinds, as for the error-aware publisher.
trait RawPlainMono<T>: Send + Sync {
    fn subscribe_raw(&self, consumer: BoxConsumer<T>);
}

/// A lazily-evaluated description of how to produce at most one value,
/// without a fault channel.
///
/// Composition nodes are immutable; each `subscribe` call runs the leaf
/// producer afresh with no state shared between executions.
///
/// # Examples
///
/// ```
/// use monoflux_mono::PlainMono;
///
/// let mono = PlainMono::create(|sink| sink.success("good")).map(|v| format!("{v}_mod"));
/// mono.subscribe(|v| assert_eq!(v, "good_mod"));
/// ```
pub struct PlainMono<T> {
    stage: Arc<dyn RawPlainMono<T>>,
}

impl<T> Clone for PlainMono<T> {
    fn clone(&self) -> Self {
        Self {
            stage: Arc::clone(&self.stage),
        }
    }
}

impl<T: Send + 'static> PlainMono<T> {
    /// Creates a publisher from a producer function.
    ///
    /// The producer is stored, not invoked; each subscription invokes it
    /// exactly once with a fresh [`PlainSink`]. The producer may call the
    /// sink synchronously or move it to another execution context first.
    pub fn create<F>(producer: F) -> Self
    where
        F: Fn(PlainSink<T>) + Send + Sync + 'static,
    {
        Self {
            stage: Arc::new(PlainSource {
                producer,
                _value: PhantomData,
            }),
        }
    }

    /// Returns a publisher applying `transform` to the produced value.
    ///
    /// The transform runs once per subscription, at the moment the
    /// upstream value arrives, on the thread that delivered it.
    pub fn map<O, F>(self, transform: F) -> PlainMono<O>
    where
        O: Send + 'static,
        F: Fn(T) -> O + Send + Sync + 'static,
    {
        PlainMono {
            stage: Arc::new(PlainMap {
                upstream: self,
                transform: Arc::new(transform),
            }),
        }
    }

    /// Subscribes a consumer, triggering one fresh execution of the chain.
    pub fn subscribe<C>(&self, consumer: C)
    where
        C: FnMut(T) + Send + 'static,
    {
        self.subscribe_boxed(Box::new(consumer));
    }

    fn subscribe_boxed(&self, consumer: BoxConsumer<T>) {
        self.stage.subscribe_raw(consumer);
    }
}

/// Capability handed to a plain producer for reporting the single value.
///
/// `success` consumes the sink, so a producer can report at most once.
/// Dropping the sink without calling it leaves the subscriber without a
/// value, which the protocol permits.
pub struct PlainSink<T> {
    consumer: BoxConsumer<T>,
}

impl<T> PlainSink<T> {
    /// Reports the produced value.
    pub fn success(mut self, value: T) {
        (self.consumer)(value);
    }
}

struct PlainSource<T, F> {
    producer: F,
    _value: PhantomData<fn(PlainSink<T>)>,
}

impl<T, F> RawPlainMono<T> for PlainSource<T, F>
where
    T: Send + 'static,
    F: Fn(PlainSink<T>) + Send + Sync,
{
    fn subscribe_raw(&self, consumer: BoxConsumer<T>) {
        (self.producer)(PlainSink { consumer });
    }
}

struct PlainMap<I, O> {
    upstream: PlainMono<I>,
    transform: Arc<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> RawPlainMono<O> for PlainMap<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn subscribe_raw(&self, mut consumer: BoxConsumer<O>) {
        let transform = Arc::clone(&self.transform);
        // Relay closure allocated fresh per subscription.
        self.upstream
            .subscribe_boxed(Box::new(move |value| consumer((*transform)(value))));
    }
}
