//! End-to-end tests across the workspace surface.
//!
//! These tests verify ndarray interop, the re-exported rolling API, and a
//! full CSV-to-rolling-average pipeline through the ingestion crate.

use approx::assert_abs_diff_eq;
use chrono::TimeDelta;
use fastrollgrid::prelude::*;
use ndarray::Array2;
use rollgrid_io::{ReaderConfig, TimeTableReader};

/// Test the ndarray conversion preserves shape and cells.
#[test]
fn test_ndarray_interop() {
    let rx = NumericRange::new(0.0, 3.0, 1.0);
    let ry = NumericRange::new(0.0, 2.0, 1.0);
    let field = Grid::new()
        .build()
        .unwrap()
        .sample(&rx, &ry, |x, y| x + y)
        .unwrap();

    let matrix: Array2<f64> = field.into_array2();
    assert_eq!(matrix.dim(), (2, 3));
    assert_eq!(matrix[[0, 0]], 0.0);
    assert_eq!(matrix[[1, 2]], 3.0);
}

/// Test the rolling API re-export behaves like the core.
#[test]
fn test_rolling_reexport() {
    let at: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();

    let result = Rolling::new()
        .window_radius(2)
        .margin(1.5)
        .build()
        .unwrap()
        .compute(&at, &values)
        .unwrap();

    assert_eq!(result.get(4), Some(4.5));
    assert_eq!(result.get(0), None);
}

/// Test the full pipeline: CSV ingestion into a margin-trimmed average.
#[test]
fn test_csv_to_rolling_average() {
    let data = "\
# Station Name: Mountain Met Lab
Date_Time,ozone_concentration_set_1
,ppb
2017-09-01T00:00:00Z,60.0
2017-09-01T01:00:00Z,64.0
2017-09-01T02:00:00Z,
2017-09-01T03:00:00Z,72.0
2017-09-01T04:00:00Z,76.0
2017-09-01T05:00:00Z,80.0
2017-09-01T06:00:00Z,78.0
";
    let table = TimeTableReader::with_config(ReaderConfig {
        comment_rows: 1,
        ..ReaderConfig::default()
    })
    .read_from(data.as_bytes())
    .unwrap();

    let samples = table.samples("ozone_concentration_set_1").unwrap();
    let result = Rolling::new()
        .window_radius(2)
        .margin(TimeDelta::hours(1))
        .build()
        .unwrap()
        .compute_samples(&samples)
        .unwrap();

    assert_eq!(result.len(), 7);
    assert_eq!(result.get(0), None, "leading margin is trimmed");
    assert_eq!(result.get(6), None, "trailing margin is trimmed");

    // Index 3: window [1, 5) skips the absent 02:00 cell
    let expected = (64.0 + 72.0 + 76.0) / 3.0;
    assert_abs_diff_eq!(result.get(3).unwrap(), expected, epsilon = 1e-12);
}
