//! Margin-gated rolling mean over a timestamped series.
//!
//! ## Purpose
//!
//! This module provides the single-pass rolling-average computation: for
//! every position whose timestamp lies strictly inside the margin-trimmed
//! sub-range of the series, the mean of the present values in the half-open
//! index window `[i - radius, i + radius)` is produced; every other position
//! stays undefined.
//!
//! ## Design notes
//!
//! * **Absence**: Missing values are skipped, not propagated; a window with
//!   no present values resolves through [`EmptyWindowFallback`].
//! * **Truncation**: Windows are clipped at the series boundaries, so
//!   in-range positions near the trimmed edges average over the partial
//!   window that remains.
//!
//! ## Invariants
//!
//! * The output is aligned 1:1 with the input series.
//! * A defined output position implies its timestamp passed the margin gate.
//!
//! ## Non-goals
//!
//! * This module does not validate the series (handled by the validator).
//! * This module does not compute the margin gate (handled by the API).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::axis::TimeAxis;
use crate::primitives::window::SliceWindow;

// ============================================================================
// Empty Window Fallback
// ============================================================================

/// Behavior when every sample in a window is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyWindowFallback {
    /// Leave the position undefined.
    #[default]
    ReturnNone,

    /// Substitute an explicit zero.
    ReturnZero,
}

// ============================================================================
// Rolling Pass
// ============================================================================

/// Compute the rolling mean for every gated position.
///
/// `gate` is the precomputed `(lower, upper)` timestamp pair; positions are
/// computed only where `lower < at[i] < upper`. `None` disables the gate.
pub fn rolling_pass<X: TimeAxis, T: Float>(
    at: &[X],
    values: &[Option<T>],
    radius: usize,
    gate: Option<(X, X)>,
    fallback: EmptyWindowFallback,
) -> Vec<Option<T>> {
    let n = at.len();
    let mut out: Vec<Option<T>> = vec![None; n];

    for i in 0..n {
        if let Some((lower, upper)) = gate {
            if !(at[i] > lower && at[i] < upper) {
                continue;
            }
        }

        let window = SliceWindow::centered(i, radius, n);
        let mut sum = T::zero();
        let mut count = 0usize;
        for &v in values[window.as_range()].iter().flatten() {
            sum = sum + v;
            count += 1;
        }

        out[i] = if count == 0 {
            match fallback {
                EmptyWindowFallback::ReturnNone => None,
                EmptyWindowFallback::ReturnZero => Some(T::zero()),
            }
        } else {
            Some(sum / T::from(count).unwrap())
        };
    }

    out
}
