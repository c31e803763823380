#![cfg(feature = "dev")]
//! Tests for grid field sampling.
//!
//! These tests verify the row-major orientation, shape, determinism, and
//! empty-range policies of the grid sampler.

use approx::assert_abs_diff_eq;
use rollgrid::internals::math::formulas::{adjusted_body_weight_kg, dew_point_temp};
use rollgrid::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn unit_ranges() -> (NumericRange<f64>, NumericRange<f64>) {
    (
        NumericRange::new(0.0, 3.0, 1.0), // x: [0, 1, 2]
        NumericRange::new(0.0, 2.0, 1.0), // y: [0, 1]
    )
}

// ============================================================================
// Orientation and Shape
// ============================================================================

/// Test the reference additive field.
///
/// x = [0, 1, 2], y = [0, 1], f = x + y must produce [[0, 1, 2], [1, 2, 3]].
#[test]
fn test_additive_reference_field() {
    let (rx, ry) = unit_ranges();
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, |x, y| x + y)
        .unwrap();

    assert_eq!(field.shape(), (2, 3));
    assert_eq!(field.row(0), &[0.0, 1.0, 2.0]);
    assert_eq!(field.row(1), &[1.0, 2.0, 3.0]);
}

/// Test y varies by row and x by column.
#[test]
fn test_row_major_orientation() {
    let rx = NumericRange::new(0.0, 4.0, 1.0);
    let ry = NumericRange::new(0.0, 3.0, 1.0);
    // Encode the coordinates so each cell identifies its origin
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, |x, y| 10.0 * y + x)
        .unwrap();

    assert_eq!(field.shape(), (3, 4));
    assert_eq!(field[(2, 3)], 23.0);
    assert_eq!(field[(0, 1)], 1.0);
}

/// Test the output shape always equals (len(y), len(x)).
#[test]
fn test_shape_matches_ranges() {
    let rx = NumericRange::new(-60.0, 60.0, 1.0);
    let ry = NumericRange::new(0.0, 100.0, 1.0);
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, dew_point_temp)
        .unwrap();

    assert_eq!(field.shape(), (ry.len(), rx.len()));
    assert_eq!(field.as_slice().len(), rx.len() * ry.len());
}

// ============================================================================
// Properties
// ============================================================================

/// Test a constant function fills every cell with the constant.
#[test]
fn test_constant_function() {
    let rx = NumericRange::new(0.0, 7.0, 1.0);
    let ry = NumericRange::new(0.0, 5.0, 1.0);
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, |_, _| 42.5)
        .unwrap();

    assert!(field.as_slice().iter().all(|&v| v == 42.5));
}

/// Test two calls with identical arguments produce identical fields.
#[test]
fn test_determinism() {
    let rx = NumericRange::new(105.0, 351.0, 1.0);
    let ry = NumericRange::new(60.0, 85.0, 1.0);
    let sampler = Grid::new().build().unwrap();

    let f = |weight: f64, height: f64| adjusted_body_weight_kg(height, weight);
    let a = sampler.sample(&rx, &ry, f).unwrap();
    let b = sampler.sample(&rx, &ry, f).unwrap();

    assert_eq!(a, b);
}

/// Test a sampled cell agrees with direct formula evaluation.
#[test]
fn test_cell_agrees_with_formula() {
    let rx = NumericRange::new(105.0, 351.0, 1.0);
    let ry = NumericRange::new(60.0, 85.0, 1.0);
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, |w, h| adjusted_body_weight_kg(h, w))
        .unwrap();

    // height 70 in is row 10, weight 200 lbs is column 95
    assert_abs_diff_eq!(field[(10, 95)], 102.841, epsilon = 1e-3);
}

// ============================================================================
// Empty Ranges
// ============================================================================

/// Test empty ranges are rejected by default.
#[test]
fn test_empty_range_fails_by_default() {
    let empty = NumericRange::new(5.0, 5.0, 1.0);
    let ry = NumericRange::new(0.0, 2.0, 1.0);
    let res = Grid::new().build().unwrap().sample(&empty, &ry, |x, y| x + y);

    assert!(
        matches!(res, Err(RollgridError::InvalidDomain { axis: "x", .. })),
        "empty x range should error"
    );
}

/// Test the opt-in policy produces a zero-dimension field.
#[test]
fn test_empty_range_allowed_by_policy() {
    let empty = NumericRange::new(5.0, 5.0, 1.0);
    let ry = NumericRange::new(0.0, 2.0, 1.0);
    let field = Grid::new()
        .empty_ranges(AllowEmpty)
        .build()
        .unwrap()
        .sample(&empty, &ry, |x, y| x + y)
        .unwrap();

    assert_eq!(field.shape(), (2, 0));
    assert!(field.is_empty());
}

/// Test degenerate steps are rejected under both policies.
#[test]
fn test_zero_step_always_rejected() {
    let bad = NumericRange::new(0.0, 10.0, 0.0);
    let ry = NumericRange::new(0.0, 2.0, 1.0);

    for policy in [FailOnEmpty, AllowEmpty] {
        let res = Grid::new()
            .empty_ranges(policy)
            .build()
            .unwrap()
            .sample(&bad, &ry, |x, y| x + y);
        assert!(matches!(res, Err(RollgridError::InvalidDomain { .. })));
    }
}
