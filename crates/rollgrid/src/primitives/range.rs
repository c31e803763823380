//! Evenly spaced axis ranges.
//!
//! ## Purpose
//!
//! This module provides [`NumericRange`], an arithmetic progression used as
//! an axis domain for grid sampling and chart framing. Ranges are half-open:
//! `stop` is never generated.
//!
//! ## Key concepts
//!
//! * **Length**: `max(0, ceil((stop - start) / step))`, so integral inputs
//!   produce exact counts.
//! * **Direction**: a negative step yields a descending range.
//!
//! ## Invariants
//!
//! * `get(i)` is defined exactly for `i < len()`.
//! * Degenerate ranges (zero or non-finite step, reversed endpoints) have
//!   length 0; the validator rejects them before sampling.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges (see the engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Numeric Range
// ============================================================================

/// Half-open arithmetic progression `start, start + step, ..` up to `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<T> {
    start: T,
    stop: T,
    step: T,
}

impl<T: Float> NumericRange<T> {
    /// Create a new range. The range is not validated here; degenerate
    /// parameters simply produce an empty range.
    pub fn new(start: T, stop: T, step: T) -> Self {
        Self { start, stop, step }
    }

    /// First endpoint.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Exclusive stop endpoint.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Spacing between consecutive values.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of values the range generates.
    pub fn len(&self) -> usize {
        if self.step == T::zero() {
            return 0;
        }
        let span = (self.stop - self.start) / self.step;
        if span <= T::zero() {
            return 0;
        }
        span.ceil().to_usize().unwrap_or(0)
    }

    /// Check if the range generates no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the range ascends (positive step).
    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.step > T::zero()
    }

    /// Value at position `idx`, or `None` past the end.
    pub fn get(&self, idx: usize) -> Option<T> {
        if idx >= self.len() {
            return None;
        }
        Some(self.start + T::from(idx).unwrap() * self.step)
    }

    /// First generated value.
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    /// Last generated value.
    pub fn last(&self) -> Option<T> {
        let n = self.len();
        if n == 0 {
            None
        } else {
            self.get(n - 1)
        }
    }

    /// Materialize all values in generation order.
    pub fn values(&self) -> Vec<T> {
        (0..self.len())
            .map(|i| self.start + T::from(i).unwrap() * self.step)
            .collect()
    }
}
