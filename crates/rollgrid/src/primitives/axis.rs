//! Timestamp axis abstraction.
//!
//! The rolling-average margin is a time span added to the first timestamp
//! and subtracted from the last. [`TimeAxis`] is the seam that lets the same
//! computation run over plain numeric timestamps and calendar date-times.

// External dependencies
use core::fmt::Debug;

// ============================================================================
// Time Axis Trait
// ============================================================================

/// An ordered timestamp type with a margin span it can shift by.
pub trait TimeAxis: Copy + PartialOrd {
    /// Span type used for margins (e.g., seconds for `f64` timestamps).
    type Span: Copy + Debug;

    /// Shift this timestamp forward by `span`.
    fn forward(self, span: Self::Span) -> Self;

    /// Shift this timestamp backward by `span`.
    fn backward(self, span: Self::Span) -> Self;
}

// ============================================================================
// Implementations
// ============================================================================

impl TimeAxis for f64 {
    type Span = f64;

    #[inline]
    fn forward(self, span: f64) -> f64 {
        self + span
    }

    #[inline]
    fn backward(self, span: f64) -> f64 {
        self - span
    }
}

impl TimeAxis for f32 {
    type Span = f32;

    #[inline]
    fn forward(self, span: f32) -> f32 {
        self + span
    }

    #[inline]
    fn backward(self, span: f32) -> f32 {
        self - span
    }
}

#[cfg(feature = "chrono")]
impl TimeAxis for chrono::DateTime<chrono::Utc> {
    type Span = chrono::TimeDelta;

    #[inline]
    fn forward(self, span: chrono::TimeDelta) -> Self {
        self + span
    }

    #[inline]
    fn backward(self, span: chrono::TimeDelta) -> Self {
        self - span
    }
}
