// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::MonofluxError;

/// Receiver half of the subscription protocol.
///
/// One subscription delivers at most one terminal signal: either
/// [`on_value`](Subscriber::on_value) or
/// [`on_error`](Subscriber::on_error), never both and never twice. The
/// signal arrives on whichever thread the leaf producer used to call its
/// sink, so implementations crossing an execution-context boundary must be
/// `Send`.
///
/// `on_subscribe` carries no cancellation handle; nothing in this design
/// models aborting a pending production, which is why the default
/// implementation is a no-op. `on_complete` exists for parity with
/// reactive-streams receivers but is never emitted by the built-in stages:
/// a value signal does not imply completion here. Pipelines that rely on
/// completion semantics need a custom stage that produces it.
pub trait Subscriber<T> {
    /// Called when the subscription is established.
    fn on_subscribe(&mut self) {}

    /// Called with the produced value.
    fn on_value(&mut self, value: T);

    /// Called with the fault that ended production.
    fn on_error(&mut self, error: MonofluxError);

    /// Called on explicit completion. Built-in stages never emit this.
    fn on_complete(&mut self) {}
}

/// Boxed subscriber as handed between stages.
///
/// Stages allocate one fresh box chain per subscription; nothing is shared
/// between two subscriptions to the same publisher.
pub type BoxSubscriber<T> = Box<dyn Subscriber<T> + Send>;
