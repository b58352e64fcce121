// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source stage backing [`Mono::create`](crate::Mono::create).

use std::marker::PhantomData;

use monoflux_core::{BoxSubscriber, MonoSink};

use crate::mono::RawMono;

/// Leaf stage owning the user-supplied producer function.
///
/// Each subscription wraps the fresh downstream subscriber in a
/// [`MonoSink`] and runs the producer once, synchronously on the
/// subscribing thread. Whether the sink is used right there or moved to
/// another execution context is entirely the producer's decision; the
/// stage neither enforces that the sink gets used nor synthesizes any
/// completion signal.
pub(crate) struct SourceMono<T, F> {
    producer: F,
    _value: PhantomData<fn(MonoSink<T>)>,
}

impl<T, F> SourceMono<T, F>
where
    F: Fn(MonoSink<T>),
{
    pub(crate) fn new(producer: F) -> Self {
        Self {
            producer,
            _value: PhantomData,
        }
    }
}

impl<T, F> RawMono<T> for SourceMono<T, F>
where
    T: Send + 'static,
    F: Fn(MonoSink<T>) + Send + Sync,
{
    fn subscribe_raw(&self, subscriber: BoxSubscriber<T>) {
        (self.producer)(MonoSink::new(subscriber));
    }
}
