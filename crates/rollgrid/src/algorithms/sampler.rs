//! Grid evaluation pass for field sampling.
//!
//! ## Purpose
//!
//! This module provides the sequential evaluation pass that fills a dense
//! row-major field with `f(x, y)` over the Cartesian product of two axis
//! value sequences, plus the policy enum for empty axis ranges.
//!
//! ## Design notes
//!
//! * **Orientation**: Output is row-major by Y: row `yi` holds
//!   `f(x, ys[yi])` for every `x`, the layout contour-plotting consumers
//!   expect.
//! * **Injection**: The pass signature is exposed as [`GridPassFn`] so a
//!   parallel implementation can be swapped in through the builder hook.
//!
//! ## Invariants
//!
//! * `out.len() == xs.len() * ys.len()`; every cell is written exactly once.
//! * Evaluation order is observable only through `f`'s side effects, which
//!   the contract forbids; the pass is deterministic for pure `f`.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges (handled by the validator).
//! * This module does not allocate the output buffer (handled by the API).

// External dependencies
use num_traits::Float;

// ============================================================================
// Empty Range Policy
// ============================================================================

/// Policy for axis ranges that generate no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyRangePolicy {
    /// Reject empty ranges with an error before evaluating anything.
    #[default]
    FailOnEmpty,

    /// Accept empty ranges and produce a field with a zero dimension.
    AllowEmpty,
}

// ============================================================================
// Grid Pass
// ============================================================================

/// Signature of a grid evaluation pass.
///
/// Arguments are the materialized x values, the materialized y values, the
/// bivariate function, and the row-major output buffer of length
/// `xs.len() * ys.len()`.
pub type GridPassFn<T> = fn(&[T], &[T], &(dyn Fn(T, T) -> T + Sync), &mut [T]);

/// Fill `out` row by row, sequentially.
pub fn grid_pass_sequential<T: Float>(
    xs: &[T],
    ys: &[T],
    f: &(dyn Fn(T, T) -> T + Sync),
    out: &mut [T],
) {
    let cols = xs.len();
    if cols == 0 || ys.is_empty() {
        return;
    }

    debug_assert_eq!(out.len(), cols * ys.len());

    for (row, &y) in out.chunks_exact_mut(cols).zip(ys.iter()) {
        for (cell, &x) in row.iter_mut().zip(xs.iter()) {
            *cell = f(x, y);
        }
    }
}
