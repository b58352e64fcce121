// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error-recovery stage backing
//! [`Mono::on_error_resume`](crate::Mono::on_error_resume).

use std::sync::Arc;

use monoflux_core::{BoxSubscriber, MonofluxError, Subscriber};

use crate::mono::{Mono, RawMono};

/// Recovery stage: owns the upstream publisher and the fault handler.
pub(crate) struct ResumeMono<T> {
    upstream: Mono<T>,
    handler: Arc<dyn Fn(MonofluxError) -> Mono<T> + Send + Sync>,
}

impl<T> ResumeMono<T> {
    pub(crate) fn new<H>(upstream: Mono<T>, handler: H) -> Self
    where
        H: Fn(MonofluxError) -> Mono<T> + Send + Sync + 'static,
    {
        Self {
            upstream,
            handler: Arc::new(handler),
        }
    }
}

impl<T> RawMono<T> for ResumeMono<T>
where
    T: Send + 'static,
{
    fn subscribe_raw(&self, subscriber: BoxSubscriber<T>) {
        self.upstream.subscribe_boxed(Box::new(ResumeSubscriber {
            downstream: Some(subscriber),
            handler: Arc::clone(&self.handler),
        }));
    }
}

/// Per-subscription relay for error recovery.
///
/// Values and completion pass straight through. On a fault the relay asks
/// the handler for a replacement publisher and moves the original
/// downstream subscriber over to it. The relay keeps nothing, so the
/// upstream value path and the replacement value path are mutually
/// exclusive continuations; a contract-violating upstream signalling
/// again after the fault finds no receiver here.
struct ResumeSubscriber<T> {
    downstream: Option<BoxSubscriber<T>>,
    handler: Arc<dyn Fn(MonofluxError) -> Mono<T> + Send + Sync>,
}

impl<T> Subscriber<T> for ResumeSubscriber<T>
where
    T: Send + 'static,
{
    fn on_subscribe(&mut self) {
        if let Some(downstream) = self.downstream.as_mut() {
            downstream.on_subscribe();
        }
    }

    fn on_value(&mut self, value: T) {
        if let Some(downstream) = self.downstream.as_mut() {
            downstream.on_value(value);
        }
    }

    fn on_error(&mut self, error: MonofluxError) {
        if let Some(downstream) = self.downstream.take() {
            let replacement = (*self.handler)(error);
            replacement.subscribe_boxed(downstream);
        }
    }

    fn on_complete(&mut self) {
        if let Some(downstream) = self.downstream.as_mut() {
            downstream.on_complete();
        }
    }
}
