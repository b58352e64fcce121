// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Default terminal subscriber backing [`Mono::subscribe`](crate::Mono::subscribe).

use std::marker::PhantomData;

use monoflux_core::{MonofluxError, Subscriber};

/// Terminal subscriber adapting a plain value consumer.
///
/// Values go to the wrapped consumer. A fault arriving here has no
/// recovery stage left, so it is contained: reported to the diagnostic
/// log together with a context description, never panicked back into the
/// execution context that delivered it. Callers wanting per-subscription
/// fault handling use [`Mono::subscribe_with`](crate::Mono::subscribe_with)
/// with their own [`Subscriber`] instead.
pub struct ConsumerSubscriber<T, C> {
    consumer: C,
    _value: PhantomData<fn(T)>,
}

impl<T, C> ConsumerSubscriber<T, C>
where
    C: FnMut(T),
{
    /// Wraps a plain consumer.
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            _value: PhantomData,
        }
    }
}

impl<T, C> Subscriber<T> for ConsumerSubscriber<T, C>
where
    C: FnMut(T),
{
    fn on_value(&mut self, value: T) {
        (self.consumer)(value);
    }

    fn on_error(&mut self, error: MonofluxError) {
        crate::warn!("Fault reached the terminal subscriber unrecovered: {error}");
    }
}
