// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use monoflux::prelude::*;
use monoflux_test_utils::{expect_recv, probe, TestError};

#[test]
fn test_async_handoff_preserves_the_value() {
    // Arrange: the producer concludes from a spawned thread, so the map
    // transform and the consumer both run on that thread.
    let mono = Mono::create(|sink| {
        thread::spawn(move || sink.success("good"));
    })
    .map(|v| format!("{v}_mod"));

    // Act
    let (tx, rx) = mpsc::channel();
    mono.subscribe(move |v| tx.send(v).expect("receiver alive"));

    // Assert: bounded wait keyed to the consumer itself.
    assert_eq!(expect_recv(&rx, 1000), "good_mod");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tokio_task_as_execution_context() -> anyhow::Result<()> {
    // Arrange: the runtime is an opaque execution context to the
    // publisher; the producer moves the sink into a spawned task.
    let mono = Mono::create(|sink| {
        tokio::spawn(async move {
            sink.success(21);
        });
    })
    .map(|v: i32| v * 2);

    let (notify_tx, mut notify_rx) = tokio::sync::mpsc::unbounded_channel();

    // Act
    mono.subscribe(move |v| {
        let _ = notify_tx.send(v);
    });

    // Assert
    let value = tokio::time::timeout(Duration::from_secs(1), notify_rx.recv())
        .await?
        .expect("consumer dropped without a value");
    assert_eq!(value, 42);

    Ok(())
}

#[test]
fn test_concurrent_subscriptions_are_independent() {
    // One composed publisher, subscribed from several threads at once.
    // Each subscription runs the producer afresh; no execution state is
    // shared, so every id arrives exactly once.
    let count = Arc::new(AtomicUsize::new(0));
    let mono = Mono::create({
        let count = Arc::clone(&count);
        move |sink| {
            let id = count.fetch_add(1, Ordering::SeqCst);
            sink.success(id);
        }
    })
    .map(|id| id * 2);

    let (tx, rx) = mpsc::channel();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mono = mono.clone();
            let tx = tx.clone();
            thread::spawn(move || {
                mono.subscribe(move |v| tx.send(v).expect("receiver alive"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("subscription thread panicked");
    }

    let mut received: Vec<usize> = (0..4).map(|_| expect_recv(&rx, 1000)).collect();
    received.sort_unstable();
    assert_eq!(received, vec![0, 2, 4, 6]);
}

#[test]
fn test_recovery_pipeline_end_to_end() {
    // Source faults, a map sits in between, recovery switches to a
    // replacement chain that feeds the downstream map.
    let mono = Mono::<i32>::error(TestError::fault("backend down"))
        .map(|v| v + 1)
        .on_error_resume(|_fault| Mono::just(10))
        .map(|v| v * 10);

    let (subscriber, handle) = probe();
    mono.subscribe_with(subscriber);

    assert_eq!(handle.values(), vec![100]);
    assert_eq!(handle.fault_count(), 0);
    assert_eq!(handle.signal_count(), 1);
}

#[test]
fn test_terminal_signal_as_mono_item() {
    let (subscriber, handle) = probe();
    Mono::just("good").subscribe_with(subscriber);

    let signals = handle.signals();
    assert_eq!(signals, vec![MonoItem::Value("good")]);

    let (subscriber, handle) = probe::<&str>();
    Mono::<&str>::error(MonofluxError::production_error("down")).subscribe_with(subscriber);
    assert!(handle.signals()[0].is_error());
}
