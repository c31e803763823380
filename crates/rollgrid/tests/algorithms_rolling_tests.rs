#![cfg(feature = "dev")]
//! Tests for the margin-gated rolling mean.
//!
//! These tests verify window slicing, margin strictness, missing-value
//! handling, and the empty-window fallback policies.

use approx::assert_abs_diff_eq;
use rollgrid::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Ten samples at unit spacing with values 1..=10.
fn counting_series() -> (Vec<f64>, Vec<Option<f64>>) {
    let at: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
    (at, values)
}

// ============================================================================
// Window Slicing
// ============================================================================

/// Test the reference scenario: radius 2, margin isolating indices 2..=7.
///
/// Index 4 averages the half-open slice [2, 6): mean(3, 4, 5, 6) = 4.5.
#[test]
fn test_reference_window_slice() {
    let (at, values) = counting_series();
    let result = Rolling::new()
        .window_radius(2)
        .margin(1.5)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.len(), 10);
    assert_eq!(result.get(4), Some(4.5));
}

/// Test windows truncate at the series start instead of erroring.
///
/// Index 2 is inside the margin but its window [0, 4) reaches the series
/// boundary; it averages over the partial slice that remains.
#[test]
fn test_window_truncates_at_boundary() {
    let (at, values) = counting_series();
    let result = Rolling::new()
        .window_radius(2)
        .margin(1.5)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    // mean(1, 2, 3, 4)
    assert_eq!(result.get(2), Some(2.5));
    // index 7: window [5, 9) -> mean(6, 7, 8, 9)
    assert_eq!(result.get(7), Some(7.5));
}

/// Test a radius larger than the series still computes over what exists.
#[test]
fn test_oversized_radius() {
    let (at, values) = counting_series();
    let result = Rolling::new()
        .window_radius(100)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    // Every window covers the whole series: mean(1..=10) = 5.5
    for i in 0..10 {
        assert_eq!(result.get(i), Some(5.5));
    }
}

// ============================================================================
// Margin Gate
// ============================================================================

/// Test positions outside the strict margin stay undefined for any radius.
#[test]
fn test_margin_strictness_for_any_radius() {
    let (at, values) = counting_series();
    for radius in [1, 2, 5, 100] {
        let result = Rolling::new()
            .window_radius(radius)
            .margin(1.5)
            .build()
            .unwrap()
            .compute(&at, &values)
            .unwrap();

        for idx in [0, 1, 8, 9] {
            assert_eq!(result.get(idx), None, "radius {radius}, index {idx}");
        }
        for idx in 2..=7 {
            assert!(result.is_defined(idx), "radius {radius}, index {idx}");
        }
    }
}

/// Test the gate comparison is strict: a timestamp exactly on the trimmed
/// bound is excluded.
#[test]
fn test_margin_boundary_is_exclusive() {
    let (at, values) = counting_series();
    // first + margin = 2.0 and last - margin = 7.0 land exactly on samples
    let result = Rolling::new()
        .window_radius(1)
        .margin(2.0)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.get(2), None);
    assert_eq!(result.get(7), None);
    assert!(result.is_defined(3));
    assert!(result.is_defined(6));
}

/// Test a margin covering the whole series leaves every position undefined.
#[test]
fn test_margin_covers_everything() {
    let (at, values) = counting_series();
    let result = Rolling::new()
        .window_radius(2)
        .margin(100.0)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.computed(), 0);
}

/// Test omitting the margin makes every position eligible.
#[test]
fn test_no_margin_computes_everywhere() {
    let (at, values) = counting_series();
    let result = Rolling::new()
        .window_radius(2)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.computed(), 10);
}

// ============================================================================
// Missing Values
// ============================================================================

/// Test a constant all-present series computes the constant exactly.
#[test]
fn test_constant_series() {
    let at: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let values: Vec<Option<f64>> = vec![Some(7.25); 20];
    let result = Rolling::new()
        .window_radius(3)
        .margin(2.5)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    for idx in 0..20 {
        match result.get(idx) {
            Some(v) => assert_eq!(v, 7.25),
            None => assert!(idx < 3 || idx > 16, "index {idx} should be defined"),
        }
    }
}

/// Test absent values are skipped, not propagated.
#[test]
fn test_absent_values_skipped() {
    let at: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let values = vec![
        Some(10.0),
        None,
        Some(20.0),
        None,
        Some(30.0),
        Some(40.0),
    ];
    let result = Rolling::new()
        .window_radius(2)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    // index 2: window [0, 4) -> present values 10, 20
    assert_abs_diff_eq!(result.get(2).unwrap(), 15.0, epsilon = 1e-12);
    // index 4: window [2, 6) -> present values 20, 30, 40
    assert_abs_diff_eq!(result.get(4).unwrap(), 30.0, epsilon = 1e-12);
}

/// Test an all-absent window stays undefined by default.
#[test]
fn test_all_absent_window_default() {
    let at: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let mut values: Vec<Option<f64>> = vec![None; 8];
    values[6] = Some(5.0);
    values[7] = Some(9.0);

    let result = Rolling::new()
        .window_radius(2)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    // window [0, 4) holds no present values
    assert_eq!(result.get(2), None);
    // window [4, 8) holds the two present values
    assert_eq!(result.get(6), Some(7.0));
}

/// Test the explicit-zero fallback for all-absent windows.
#[test]
fn test_all_absent_window_zero_fallback() {
    let at: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let values: Vec<Option<f64>> = vec![None; 8];

    let result = Rolling::new()
        .window_radius(2)
        .empty_window(ReturnZero)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    for idx in 0..8 {
        assert_eq!(result.get(idx), Some(0.0));
    }
}

// ============================================================================
// Timestamp Axes
// ============================================================================

/// Test the calendar-time axis: hourly timestamps with a duration margin.
#[cfg(feature = "chrono")]
#[test]
fn test_chrono_axis() {
    use chrono::{DateTime, TimeDelta, Utc};

    let start = DateTime::<Utc>::from_timestamp(1_504_224_000, 0).unwrap();
    let at: Vec<DateTime<Utc>> = (0..10).map(|i| start + TimeDelta::hours(i)).collect();
    let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();

    let result = Rolling::new()
        .window_radius(2)
        .margin(TimeDelta::minutes(90))
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.get(0), None);
    assert_eq!(result.get(9), None);
    assert_eq!(result.get(4), Some(4.5));
}
