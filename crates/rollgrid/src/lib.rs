//! # rollgrid — chart-data preparation for contour and time-series charts
//!
//! Two small, independent utilities behind one fluent API:
//!
//! * **Grid sampling**: evaluate a bivariate formula over the Cartesian
//!   product of two axis ranges, producing a dense row-major field for
//!   contour-style charts.
//! * **Rolling means**: compute a margin-trimmed, centered rolling average
//!   over a timestamped series that may contain missing observations, for
//!   time-series overlays.
//!
//! The crate also ships the chart formulas the original demos visualize
//! (dew-point temperature, ideal/adjusted body weight, unit conversions)
//! and axis-bounds computation for chart framing.
//!
//! ## Quick Start
//!
//! ### Sampling a field
//!
//! ```rust
//! use rollgrid::prelude::*;
//!
//! let air_temp = NumericRange::new(-60.0, 60.0, 1.0); // degrees C
//! let rel_hum = NumericRange::new(0.0, 100.0, 1.0); // percent
//!
//! let sampler = Grid::new().build()?;
//! let field = sampler.sample(&air_temp, &rel_hum, formulas::dew_point_temp)?;
//!
//! // y varies by row, x by column
//! assert_eq!(field.shape(), (rel_hum.len(), air_temp.len()));
//! # Result::<(), RollgridError>::Ok(())
//! ```
//!
//! ### Rolling average with a margin
//!
//! ```rust
//! use rollgrid::prelude::*;
//!
//! // Hourly samples on a numeric timestamp axis
//! let at: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
//!
//! let model = Rolling::new()
//!     .window_radius(2) // window slice [i - 2, i + 2)
//!     .margin(1.5) // trim 1.5 time units at both ends
//!     .build()?;
//!
//! let result = model.compute(&at, &values)?;
//!
//! // Positions outside the margin stay undefined
//! assert_eq!(result.get(0), None);
//! // mean of values at indices [2, 6)
//! assert_eq!(result.get(4), Some(4.5));
//! # Result::<(), RollgridError>::Ok(())
//! ```
//!
//! ### Missing observations
//!
//! Absence is explicit: a missing or unparseable observation is `None`.
//! Windows average over their present values only; a window with no
//! present values resolves through an explicit fallback policy:
//!
//! ```rust
//! use rollgrid::prelude::*;
//!
//! let at: Vec<f64> = (0..6).map(|i| i as f64).collect();
//! let values = vec![None, None, None, Some(2.0), Some(4.0), None];
//!
//! let model = Rolling::new()
//!     .window_radius(1)
//!     .empty_window(ReturnZero)
//!     .build()?;
//! let result = model.compute(&at, &values)?;
//!
//! assert_eq!(result.get(1), Some(0.0)); // all-absent window, explicit zero
//! assert_eq!(result.get(4), Some(3.0)); // mean of the present values
//! # Result::<(), RollgridError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, RollgridError>` and fail fast on
//! malformed input: empty or non-monotonic ranges, unsorted series,
//! mismatched lengths, present non-finite values. Partial results are
//! never returned.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rollgrid = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `chrono` feature to use calendar date-times as the timestamp
//! axis (`chrono::DateTime<Utc>` with `chrono::TimeDelta` margins).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure formulas and chart geometry.
mod math;

// Layer 3: Algorithms - grid evaluation and rolling averages.
mod algorithms;

// Layer 4: Engine - validation and output assembly.
mod engine;

// High-level fluent API.
pub mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        AxisBounds,
        EmptyRangePolicy::{AllowEmpty, FailOnEmpty},
        EmptyWindowFallback::{ReturnNone, ReturnZero},
        Field2D, GridSampler, GridSamplerBuilder as Grid, NumericRange, RollgridError,
        RollingMean, RollingMeanBuilder as Rolling, RollingResult, SeriesSample, TimeAxis,
    };
    pub use crate::math::formulas;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
