//! Axis-bounds computation for chart framing.
//!
//! Bounds are the min/max of the generated axis values, optionally inflated
//! by a margin on all four sides so plotted data does not touch the frame.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RollgridError;
use crate::primitives::range::NumericRange;

// ============================================================================
// Axis Bounds
// ============================================================================

/// Rectangular chart bounds `[x_min, x_max, y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds<T> {
    pub x_min: T,
    pub x_max: T,
    pub y_min: T,
    pub y_max: T,
}

impl<T: Float> AxisBounds<T> {
    /// Bounds spanning the generated values of two axis ranges.
    ///
    /// Uses the first and last generated values, so a half-open range
    /// `0..100` step 1 yields a max of 99, matching what the chart shows.
    pub fn from_ranges(
        x: &NumericRange<T>,
        y: &NumericRange<T>,
    ) -> Result<Self, RollgridError> {
        let (x_first, x_last) = endpoints(x, "x")?;
        let (y_first, y_last) = endpoints(y, "y")?;
        Ok(Self {
            x_min: x_first.min(x_last),
            x_max: x_first.max(x_last),
            y_min: y_first.min(y_last),
            y_max: y_first.max(y_last),
        })
    }

    /// Bounds spanning two materialized coordinate slices.
    pub fn from_slices(x: &[T], y: &[T]) -> Result<Self, RollgridError> {
        let (x_min, x_max) = slice_extent(x, "x")?;
        let (y_min, y_max) = slice_extent(y, "y")?;
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Inflate every side by `margin`.
    pub fn with_margin(self, margin: T) -> Self {
        Self {
            x_min: self.x_min - margin,
            x_max: self.x_max + margin,
            y_min: self.y_min - margin,
            y_max: self.y_max + margin,
        }
    }

    /// Bounds in `[x_min, x_max, y_min, y_max]` order.
    pub fn as_array(&self) -> [T; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn endpoints<T: Float>(
    range: &NumericRange<T>,
    axis: &'static str,
) -> Result<(T, T), RollgridError> {
    match (range.first(), range.last()) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(RollgridError::InvalidDomain {
            axis,
            reason: String::from("cannot compute bounds of an empty range"),
        }),
    }
}

fn slice_extent<T: Float>(values: &[T], axis: &'static str) -> Result<(T, T), RollgridError> {
    if values.is_empty() {
        return Err(RollgridError::InvalidDomain {
            axis,
            reason: String::from("cannot compute bounds of an empty slice"),
        });
    }
    let mut lo = values[0];
    let mut hi = values[0];
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(RollgridError::InvalidNumericValue(format!(
                "{axis}[{i}]={}",
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok((lo, hi))
}
