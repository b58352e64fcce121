// Copyright 2026 Monoflux Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use monoflux_core::{MonoItem, MonofluxError};

#[test]
fn test_predicates() {
    let value: MonoItem<i32> = MonoItem::Value(1);
    assert!(value.is_value());
    assert!(!value.is_error());

    let error: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("failed"));
    assert!(error.is_error());
    assert!(!error.is_value());
}

#[test]
fn test_ok_and_err_conversions() {
    let value: MonoItem<i32> = MonoItem::Value(7);
    assert_eq!(value.ok(), Some(7));

    let value: MonoItem<i32> = MonoItem::Value(7);
    assert!(value.err().is_none());

    let error: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("failed"));
    assert!(error.clone().ok().is_none());
    assert!(error.err().is_some());
}

#[test]
fn test_map_transforms_values_and_passes_errors() {
    let value: MonoItem<i32> = MonoItem::Value(21);
    assert_eq!(value.map(|v| v * 2), MonoItem::Value(42));

    let error: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("failed"));
    assert!(error.map(|v| v * 2).is_error());
}

#[test]
fn test_errors_never_compare_equal() {
    let a: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("same"));
    let b: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("same"));
    assert_ne!(a, b);

    assert_eq!(MonoItem::Value(1), MonoItem::Value(1));
    assert_ne!(MonoItem::Value(1), MonoItem::Value(2));
}

#[test]
fn test_result_round_trip() {
    let item: MonoItem<i32> = Ok::<_, MonofluxError>(5).into();
    assert_eq!(item, MonoItem::Value(5));

    let result: Result<i32, MonofluxError> = MonoItem::Value(5).into();
    assert_eq!(result.unwrap(), 5);

    let item: MonoItem<i32> = Err(MonofluxError::production_error("failed")).into();
    let result: Result<i32, MonofluxError> = item.into();
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "called `MonoItem::unwrap()` on an `Error` value")]
fn test_unwrap_panics_on_error() {
    let error: MonoItem<i32> = MonoItem::Error(MonofluxError::production_error("failed"));
    error.unwrap();
}
