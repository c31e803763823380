//! High-level API for grid sampling and rolling averages.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: fluent
//! builders for configuring a grid sampler and a rolling-mean processor,
//! with validation deferred to `build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all
//!   parameters; every behavioral choice is explicit typed configuration.
//! * **Validated**: Parameters are checked when `.build()` is called; data
//!   is checked on every `sample`/`compute` call.
//! * **Type-Safe**: Generic over `Float` precision and [`TimeAxis`]
//!   timestamp types.
//!
//! ### Configuration flow
//!
//! 1. Create a builder via `Grid::new()` or `Rolling::new()` (prelude
//!    aliases for the builder types).
//! 2. Chain configuration methods.
//! 3. Call `.build()` to obtain the processor, then `.sample(..)` or
//!    `.compute(..)` per dataset.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::rolling::rolling_pass;
use crate::algorithms::sampler::grid_pass_sequential;
use crate::engine::validator::Validator;
use crate::primitives::sample::split_samples;

// Publicly re-exported types
pub use crate::algorithms::rolling::EmptyWindowFallback;
pub use crate::algorithms::sampler::{EmptyRangePolicy, GridPassFn};
pub use crate::engine::output::{Field2D, RollingResult};
pub use crate::math::bounds::AxisBounds;
pub use crate::primitives::axis::TimeAxis;
pub use crate::primitives::errors::RollgridError;
pub use crate::primitives::range::NumericRange;
pub use crate::primitives::sample::SeriesSample;

// ============================================================================
// Grid Sampler Builder
// ============================================================================

/// Fluent builder for a grid sampler.
#[derive(Debug, Clone)]
pub struct GridSamplerBuilder<T: Float> {
    /// Policy for axis ranges that generate no values.
    pub empty_ranges: Option<EmptyRangePolicy>,

    // ======================================
    // DEV
    // ======================================
    /// Custom grid evaluation pass.
    #[doc(hidden)]
    pub custom_grid_pass: Option<GridPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GridSamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GridSamplerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            empty_ranges: None,
            custom_grid_pass: None,
            duplicate_param: None,
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

    /// Set a custom grid evaluation pass.
    #[doc(hidden)]
    pub fn custom_grid_pass(mut self, pass: GridPassFn<T>) -> Self {
        self.custom_grid_pass = Some(pass);
        self
    }

    /// Build the grid sampler.
    pub fn build(self) -> Result<GridSampler<T>, RollgridError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(GridSampler {
            empty_ranges: self.empty_ranges.unwrap_or_default(),
            grid_pass: self.custom_grid_pass.unwrap_or(grid_pass_sequential::<T>),
        })
    }
}

// ============================================================================
// Grid Sampler
// ============================================================================

/// Evaluates a bivariate function over the Cartesian product of two axis
/// ranges, producing a dense row-major field.
pub struct GridSampler<T: Float> {
    empty_ranges: EmptyRangePolicy,
    grid_pass: GridPassFn<T>,
}

impl<T: Float> GridSampler<T> {
    /// Sample `f` over `range_x` x `range_y`.
    ///
    /// The output has shape `(range_y.len(), range_x.len())`: y varies by
    /// row, x by column. Two calls with identical arguments produce
    /// identical fields.
    pub fn sample<F>(
        &self,
        range_x: &NumericRange<T>,
        range_y: &NumericRange<T>,
        f: F,
    ) -> Result<Field2D<T>, RollgridError>
    where
        F: Fn(T, T) -> T + Sync,
    {
        match self.empty_ranges {
            EmptyRangePolicy::FailOnEmpty => {
                Validator::validate_nonempty_range(range_x, "x")?;
                Validator::validate_nonempty_range(range_y, "y")?;
            }
            EmptyRangePolicy::AllowEmpty => {
                Validator::validate_range(range_x, "x")?;
                Validator::validate_range(range_y, "y")?;
            }
        }

        let xs = range_x.values();
        let ys = range_y.values();

        let mut data = vec![T::zero(); xs.len() * ys.len()];
        (self.grid_pass)(&xs, &ys, &f, &mut data);

        Ok(Field2D::from_raw(data, ys.len(), xs.len()))
    }
}

// ============================================================================
// Rolling Mean Builder
// ============================================================================

/// Fluent builder for a rolling-mean processor.
#[derive(Debug, Clone)]
pub struct RollingMeanBuilder<X: TimeAxis> {
    /// Samples included on each side of the center index.
    pub window_radius: Option<usize>,

    /// Time span trimmed from both ends of the series before averaging.
    pub margin: Option<X::Span>,

    /// Behavior when every sample in a window is absent.
    pub empty_window: Option<EmptyWindowFallback>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<X: TimeAxis> Default for RollingMeanBuilder<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: TimeAxis> RollingMeanBuilder<X> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_radius: None,
            margin: None,
            empty_window: None,
            duplicate_param: None,
        }
    }

    /// Set the window radius (samples on each side of the center).
    ///
    /// The window slice is `[i - radius, i + radius)`: half-open and
    /// asymmetric by one element. Defaults to 1.
    pub fn window_radius(mut self, radius: usize) -> Self {
        if self.window_radius.is_some() {
            self.duplicate_param = Some("window_radius");
        }
        self.window_radius = Some(radius);
        self
    }

    /// Set the margin trimmed from both series ends.
    ///
    /// Averages are computed only for positions whose timestamp lies
    /// strictly between `first + margin` and `last - margin`. Without a
    /// margin, every position is eligible.
    pub fn margin(mut self, margin: X::Span) -> Self {
        if self.margin.is_some() {
            self.duplicate_param = Some("margin");
        }
        self.margin = Some(margin);
        self
    }

    /// Set the fallback for windows with no present values.
    pub fn empty_window(mut self, fallback: EmptyWindowFallback) -> Self {
        if self.empty_window.is_some() {
            self.duplicate_param = Some("empty_window");
        }
        self.empty_window = Some(fallback);
        self
    }

    /// Build the rolling-mean processor.
    pub fn build(self) -> Result<RollingMean<X>, RollgridError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_radius = self.window_radius.unwrap_or(1);
        Validator::validate_window_radius(window_radius)?;

        Ok(RollingMean {
            window_radius,
            margin: self.margin,
            empty_window: self.empty_window.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Rolling Mean
// ============================================================================

/// Computes margin-gated rolling means over a timestamped series.
#[derive(Debug, Clone)]
pub struct RollingMean<X: TimeAxis> {
    window_radius: usize,
    margin: Option<X::Span>,
    empty_window: EmptyWindowFallback,
}

impl<X: TimeAxis> RollingMean<X> {
    /// Compute the rolling mean over parallel timestamp and value slices.
    ///
    /// Timestamps must be strictly ascending; present values must be
    /// finite. The result is aligned 1:1 with the input, with positions
    /// outside the margin gate left undefined.
    pub fn compute<T: Float>(
        &self,
        at: &[X],
        values: &[Option<T>],
    ) -> Result<RollingResult<T>, RollgridError> {
        Validator::validate_lengths(at.len(), values.len())?;
        Validator::validate_series_axis(at)?;
        Validator::validate_values(values)?;

        let gate = match self.margin {
            Some(margin) => {
                let lower = at[0].forward(margin);
                let upper = at[at.len() - 1].backward(margin);
                if lower.partial_cmp(&upper).is_none() {
                    return Err(RollgridError::InvalidMargin(String::from(
                        "margin arithmetic produced incomparable gate bounds",
                    )));
                }
                Some((lower, upper))
            }
            None => None,
        };

        let out = rolling_pass(at, values, self.window_radius, gate, self.empty_window);
        Ok(RollingResult::new(out, self.window_radius))
    }

    /// Compute the rolling mean over a sample slice.
    pub fn compute_samples<T: Float>(
        &self,
        samples: &[SeriesSample<X, T>],
    ) -> Result<RollingResult<T>, RollgridError> {
        let (at, values): (Vec<X>, Vec<Option<T>>) = split_samples(samples);
        self.compute(&at, &values)
    }
}
