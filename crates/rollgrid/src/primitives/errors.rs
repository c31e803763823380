//! Error types for chart-data preparation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while sampling
//! grid fields or computing rolling averages, including domain validation,
//! series validation, and builder configuration mistakes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Domain validation**: Empty, non-finite, or non-monotonic axis ranges.
//! 2. **Series validation**: Empty, unsorted, or length-mismatched series.
//! 3. **Parameter validation**: Invalid window radius or margin configuration.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for grid sampling and rolling-average operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RollgridError {
    /// An axis range is empty, non-finite, or not strictly monotonic.
    InvalidDomain {
        /// Which axis the range was supplied for (e.g., "x", "y").
        axis: &'static str,
        /// Why the range was rejected.
        reason: String,
    },

    /// A time series is empty, unsorted, or otherwise malformed.
    InvalidSeries(String),

    /// Timestamp and value sequences must have the same number of elements.
    MismatchedInputs {
        /// Number of timestamps.
        at_len: usize,
        /// Number of values.
        value_len: usize,
    },

    /// Input data contains a present NaN or infinite value.
    InvalidNumericValue(String),

    /// The rolling window must cover at least one sample on each side.
    InvalidWindowRadius(usize),

    /// Margin arithmetic produced bounds that cannot be ordered.
    InvalidMargin(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RollgridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDomain { axis, reason } => {
                write!(f, "Invalid {axis} range: {reason}")
            }
            Self::InvalidSeries(msg) => write!(f, "Invalid series: {msg}"),
            Self::MismatchedInputs { at_len, value_len } => {
                write!(
                    f,
                    "Length mismatch: {at_len} timestamps, {value_len} values"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidWindowRadius(radius) => {
                write!(f, "Invalid window radius: {radius} (must be at least 1)")
            }
            Self::InvalidMargin(msg) => write!(f, "Invalid margin: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RollgridError {}
