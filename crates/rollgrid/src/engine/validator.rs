//! Input validation for grid sampling and rolling averages.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions applied to axis
//! ranges, series data, and builder parameters before any computation runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` and [`TimeAxis`] types.
//!
//! ## Key concepts
//!
//! * **Domain checks**: Finite endpoints, non-zero step, non-empty ranges.
//! * **Series checks**: Strictly ascending timestamps, finite present values.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::axis::TimeAxis;
use crate::primitives::errors::RollgridError;
use crate::primitives::range::NumericRange;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sampler and rolling-average inputs.
///
/// Provides static methods returning `Result<(), RollgridError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Domain Validation
    // ========================================================================

    /// Validate the parameters of an axis range.
    ///
    /// Emptiness is checked separately so the caller can apply its
    /// empty-range policy.
    pub fn validate_range<T: Float>(
        range: &NumericRange<T>,
        axis: &'static str,
    ) -> Result<(), RollgridError> {
        if !range.start().is_finite() || !range.stop().is_finite() {
            return Err(RollgridError::InvalidDomain {
                axis,
                reason: String::from("endpoints must be finite"),
            });
        }
        if range.step() == T::zero() || !range.step().is_finite() {
            return Err(RollgridError::InvalidDomain {
                axis,
                reason: String::from("step must be finite and non-zero"),
            });
        }
        Ok(())
    }

    /// Validate that an axis range generates at least one value.
    pub fn validate_nonempty_range<T: Float>(
        range: &NumericRange<T>,
        axis: &'static str,
    ) -> Result<(), RollgridError> {
        Self::validate_range(range, axis)?;
        if range.is_empty() {
            return Err(RollgridError::InvalidDomain {
                axis,
                reason: String::from("range generates no values"),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Series Validation
    // ========================================================================

    /// Validate that timestamp and value sequences have equal lengths.
    pub fn validate_lengths(at_len: usize, value_len: usize) -> Result<(), RollgridError> {
        if at_len != value_len {
            return Err(RollgridError::MismatchedInputs { at_len, value_len });
        }
        Ok(())
    }

    /// Validate the timestamp axis of a series: non-empty and strictly
    /// ascending.
    ///
    /// Incomparable adjacent timestamps (e.g., a NaN axis value) are
    /// rejected as unsorted.
    pub fn validate_series_axis<X: TimeAxis>(at: &[X]) -> Result<(), RollgridError> {
        if at.is_empty() {
            return Err(RollgridError::InvalidSeries(String::from(
                "series is empty",
            )));
        }
        for (i, pair) in at.windows(2).enumerate() {
            match pair[0].partial_cmp(&pair[1]) {
                Some(Ordering::Less) => {}
                _ => {
                    return Err(RollgridError::InvalidSeries(format!(
                        "timestamps must be strictly ascending (violation between positions {} and {})",
                        i,
                        i + 1
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate that every present value is finite.
    ///
    /// Absence has exactly one representation (`None`); a present NaN or
    /// infinity is an input error, never treated as missing.
    pub fn validate_values<T: Float>(values: &[Option<T>]) -> Result<(), RollgridError> {
        for (i, v) in values.iter().enumerate() {
            if let Some(v) = v {
                if !v.is_finite() {
                    return Err(RollgridError::InvalidNumericValue(format!(
                        "value[{}]={}",
                        i,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the rolling-window radius.
    pub fn validate_window_radius(radius: usize) -> Result<(), RollgridError> {
        if radius == 0 {
            return Err(RollgridError::InvalidWindowRadius(radius));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RollgridError> {
        if let Some(param) = duplicate_param {
            return Err(RollgridError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
