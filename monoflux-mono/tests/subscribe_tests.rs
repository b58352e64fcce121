// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use monoflux_core::{MonofluxError, Subscriber};
use monoflux_mono::Mono;
use monoflux_test_utils::{probe, TestError};

#[test]
fn test_consumer_receives_the_value() {
    let received = Arc::new(Mutex::new(None));
    let mono = Mono::just("good").map(|v| format!("{v}_mod"));

    mono.subscribe({
        let received = Arc::clone(&received);
        move |v| *received.lock().unwrap() = Some(v)
    });

    assert_eq!(
        received.lock().unwrap().as_deref(),
        Some("good_mod")
    );
}

#[test]
fn test_terminal_fault_is_contained() {
    // With no recovery stage attached, the fault is reported to the
    // diagnostic log; the consumer never runs and nothing unwinds back
    // into the caller.
    let delivered = Arc::new(AtomicBool::new(false));
    let mono = Mono::<i32>::error(TestError::fault("boom"));

    mono.subscribe({
        let delivered = Arc::clone(&delivered);
        move |_v| delivered.store(true, Ordering::SeqCst)
    });

    assert!(!delivered.load(Ordering::SeqCst));
}

#[test]
fn test_full_protocol_subscriber_observes_the_fault() {
    let mono = Mono::<i32>::error(TestError::fault("boom"));

    let (subscriber, handle) = probe();
    mono.subscribe_with(subscriber);

    assert_eq!(handle.fault_count(), 1);
    let fault = handle.first_fault().expect("expected a fault");
    assert!(fault.to_string().contains("boom"));
}

#[test]
fn test_custom_subscriber_implements_per_subscription_handling() {
    struct Collecting {
        values: Arc<Mutex<Vec<i32>>>,
        faults: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber<i32> for Collecting {
        fn on_value(&mut self, value: i32) {
            self.values.lock().unwrap().push(value);
        }

        fn on_error(&mut self, error: MonofluxError) {
            self.faults.lock().unwrap().push(error.to_string());
        }
    }

    let values = Arc::new(Mutex::new(Vec::new()));
    let faults = Arc::new(Mutex::new(Vec::new()));

    Mono::just(3).subscribe_with(Collecting {
        values: Arc::clone(&values),
        faults: Arc::clone(&faults),
    });
    Mono::<i32>::error(TestError::fault("boom")).subscribe_with(Collecting {
        values: Arc::clone(&values),
        faults: Arc::clone(&faults),
    });

    assert_eq!(*values.lock().unwrap(), vec![3]);
    assert_eq!(faults.lock().unwrap().len(), 1);
    assert!(faults.lock().unwrap()[0].contains("boom"));
}

#[test]
fn test_convenience_subscription_is_rerunnable() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let mono = Mono::just(1);

    for _ in 0..2 {
        let received = Arc::clone(&received);
        mono.subscribe(move |v| received.lock().unwrap().push(v));
    }

    assert_eq!(*received.lock().unwrap(), vec![1, 1]);
}
