// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Probe subscriber recording every protocol signal for later assertion.

use std::sync::Arc;

use monoflux_core::{MonoItem, MonofluxError, Subscriber};
use parking_lot::Mutex;

struct ProbeState<T> {
    signals: Vec<MonoItem<T>>,
    subscriptions: usize,
    completions: usize,
}

/// Subscriber half of a probe; records every signal it receives.
///
/// Safe to hand across execution contexts: the recorded state lives
/// behind a lock shared with the [`ProbeHandle`].
pub struct ProbeSubscriber<T> {
    state: Arc<Mutex<ProbeState<T>>>,
}

/// Assertion half of a probe; reads what the subscriber recorded.
pub struct ProbeHandle<T> {
    state: Arc<Mutex<ProbeState<T>>>,
}

/// Creates a connected subscriber/handle pair.
pub fn probe<T>() -> (ProbeSubscriber<T>, ProbeHandle<T>) {
    let state = Arc::new(Mutex::new(ProbeState {
        signals: Vec::new(),
        subscriptions: 0,
        completions: 0,
    }));
    (
        ProbeSubscriber {
            state: Arc::clone(&state),
        },
        ProbeHandle { state },
    )
}

impl<T> Subscriber<T> for ProbeSubscriber<T> {
    fn on_subscribe(&mut self) {
        self.state.lock().subscriptions += 1;
    }

    fn on_value(&mut self, value: T) {
        self.state.lock().signals.push(MonoItem::Value(value));
    }

    fn on_error(&mut self, error: MonofluxError) {
        self.state.lock().signals.push(MonoItem::Error(error));
    }

    fn on_complete(&mut self) {
        self.state.lock().completions += 1;
    }
}

impl<T> ProbeHandle<T> {
    /// All recorded terminal signals, in arrival order.
    pub fn signals(&self) -> Vec<MonoItem<T>>
    where
        T: Clone,
    {
        self.state.lock().signals.clone()
    }

    /// The recorded values, in arrival order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.state
            .lock()
            .signals
            .iter()
            .filter_map(|signal| match signal {
                MonoItem::Value(v) => Some(v.clone()),
                MonoItem::Error(_) => None,
            })
            .collect()
    }

    /// Number of recorded value signals.
    pub fn value_count(&self) -> usize {
        self.state
            .lock()
            .signals
            .iter()
            .filter(|signal| signal.is_value())
            .count()
    }

    /// Number of recorded fault signals.
    pub fn fault_count(&self) -> usize {
        self.state
            .lock()
            .signals
            .iter()
            .filter(|signal| signal.is_error())
            .count()
    }

    /// Total terminal signals recorded (values and faults).
    pub fn signal_count(&self) -> usize {
        self.state.lock().signals.len()
    }

    /// The first recorded fault, if any.
    pub fn first_fault(&self) -> Option<MonofluxError> {
        self.state.lock().signals.iter().find_map(|signal| match signal {
            MonoItem::Error(e) => Some(e.clone()),
            MonoItem::Value(_) => None,
        })
    }

    /// Number of `on_complete` signals received.
    pub fn completions(&self) -> usize {
        self.state.lock().completions
    }

    /// Number of `on_subscribe` signals received.
    pub fn subscriptions(&self) -> usize {
        self.state.lock().subscriptions
    }
}
