//! Parallel execution engine for grid field sampling.
//!
//! ## Purpose
//!
//! This module provides the parallel grid-evaluation pass that is injected
//! into the core sampler through its custom-pass hook. Rows are independent,
//! so the field fans out across CPU cores with no coordination beyond the
//! final join.
//!
//! ## Design notes
//!
//! * **Implementation**: A drop-in replacement for the sequential pass with
//!   the same signature and cell-for-cell identical output.
//! * **Parallelism**: Uses `rayon` for data-parallel execution (feature
//!   `cpu`).
//! * **Granularity**: One task per output row; cells within a row are
//!   evaluated sequentially to keep tasks coarse.
//!
//! ## Invariants
//!
//! * `out.len() == xs.len() * ys.len()`; every cell is written exactly once.
//! * For a pure function the result is identical to the sequential pass.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges (handled by the core validator).
//! * This module does not allocate the output buffer (handled by the API).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// ============================================================================
// Parallel Grid Pass
// ============================================================================

/// Fill `out` with one rayon task per row.
#[cfg(feature = "cpu")]
pub fn grid_pass_parallel<T>(xs: &[T], ys: &[T], f: &(dyn Fn(T, T) -> T + Sync), out: &mut [T])
where
    T: Float + Send + Sync,
{
    let cols = xs.len();
    if cols == 0 || ys.is_empty() {
        return;
    }

    debug_assert_eq!(out.len(), cols * ys.len());

    out.par_chunks_exact_mut(cols)
        .zip(ys.par_iter())
        .for_each(|(row, &y)| {
            for (cell, &x) in row.iter_mut().zip(xs.iter()) {
                *cell = f(x, y);
            }
        });
}
