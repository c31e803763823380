//! High-level API wrapping the core grid sampler with parallel execution.
//!
//! ## Purpose
//!
//! This module mirrors the core builder surface and injects the parallel
//! grid pass when parallel execution is requested (the default with the
//! `cpu` feature). Rolling averages are re-exported unchanged: a single
//! linear pass has nothing to fan out.
//!
//! ## Design notes
//!
//! * **Delegation**: `build()` configures a core builder and hands back the
//!   core sampler type; only the evaluation pass differs.
//! * **Fallback**: Without the `cpu` feature, `parallel(true)` quietly
//!   builds the sequential pass.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::grid_pass_parallel;

// Publicly re-exported core types
pub use rollgrid::api::{
    AxisBounds, EmptyRangePolicy, EmptyWindowFallback, Field2D, GridSampler, NumericRange,
    RollgridError, RollingMean, RollingMeanBuilder, RollingResult, SeriesSample, TimeAxis,
};

// ============================================================================
// Grid Sampler Builder
// ============================================================================

/// Fluent builder for a grid sampler with parallel execution.
#[derive(Debug, Clone)]
pub struct GridSamplerBuilder<T: Float> {
    /// Policy for axis ranges that generate no values.
    pub empty_ranges: Option<EmptyRangePolicy>,

    /// Whether to evaluate rows in parallel (default: true with `cpu`).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float + Send + Sync> Default for GridSamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> GridSamplerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            empty_ranges: None,
            parallel: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the policy for empty axis ranges.
    pub fn empty_ranges(mut self, policy: EmptyRangePolicy) -> Self {
        if self.empty_ranges.is_some() {
            self.duplicate_param = Some("empty_ranges");
        }
        self.empty_ranges = Some(policy);
        self
    }

    /// Enable or disable parallel row evaluation.
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Build the grid sampler.
    pub fn build(self) -> Result<GridSampler<T>, RollgridError> {
        let mut builder = rollgrid::api::GridSamplerBuilder::new();
        if let Some(policy) = self.empty_ranges {
            builder = builder.empty_ranges(policy);
        }
        builder.duplicate_param = self.duplicate_param;

        #[cfg(feature = "cpu")]
        if self.parallel.unwrap_or(true) {
            builder = builder.custom_grid_pass(grid_pass_parallel::<T>);
        }

        builder.build()
    }
}
