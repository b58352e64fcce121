// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map stage backing [`Mono::map`](crate::Mono::map).

use std::sync::Arc;

use monoflux_core::{BoxSubscriber, MonofluxError, Subscriber};

use crate::mono::{Mono, RawMono};

/// Transformation stage: owns the upstream publisher and the transform.
///
/// The node itself is immutable; each subscription allocates its own
/// [`MapSubscriber`] relay so concurrent subscriptions never touch shared
/// state.
pub(crate) struct MapMono<I, O> {
    upstream: Mono<I>,
    transform: Arc<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> MapMono<I, O> {
    pub(crate) fn new<F>(upstream: Mono<I>, transform: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Self {
            upstream,
            transform: Arc::new(transform),
        }
    }
}

impl<I, O> RawMono<O> for MapMono<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn subscribe_raw(&self, subscriber: BoxSubscriber<O>) {
        self.upstream.subscribe_boxed(Box::new(MapSubscriber {
            downstream: subscriber,
            transform: Arc::clone(&self.transform),
        }));
    }
}

/// Per-subscription relay: transforms the value signal, forwards every
/// other signal unchanged. Faults in particular travel through, so a
/// recovery stage downstream of a `map` still sees them.
struct MapSubscriber<I, O> {
    downstream: BoxSubscriber<O>,
    transform: Arc<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Subscriber<I> for MapSubscriber<I, O> {
    fn on_subscribe(&mut self) {
        self.downstream.on_subscribe();
    }

    fn on_value(&mut self, value: I) {
        let mapped = (*self.transform)(value);
        self.downstream.on_value(mapped);
    }

    fn on_error(&mut self, error: MonofluxError) {
        self.downstream.on_error(error);
    }

    fn on_complete(&mut self) {
        self.downstream.on_complete();
    }
}
