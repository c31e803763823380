//! # fastrollgrid — parallel grid evaluation for rollgrid
//!
//! A drop-in companion to the `rollgrid` core: the same fluent API, with
//! grid fields evaluated one row per CPU task via `rayon` (feature `cpu`,
//! on by default) and `ndarray` interop for downstream numeric consumers.
//!
//! Rolling averages are re-exported from the core unchanged: the rolling
//! pass is a single linear scan and gains nothing from fanning out.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastrollgrid::prelude::*;
//!
//! let air_temp = NumericRange::new(-60.0, 60.0, 1.0);
//! let rel_hum = NumericRange::new(0.0, 100.0, 1.0);
//!
//! let field = Grid::new()
//!     .parallel(true)
//!     .build()?
//!     .sample(&air_temp, &rel_hum, formulas::dew_point_temp)?;
//!
//! // Hand the field to ndarray-based consumers without copying
//! let matrix = field.into_array2();
//! assert_eq!(matrix.dim(), (100, 120));
//! # Result::<(), RollgridError>::Ok(())
//! ```
//!
//! Parallel and sequential evaluation produce cell-for-cell identical
//! fields for pure functions; `parallel(false)` selects the sequential
//! pass for single-core environments.

// Execution engine: the parallel grid pass.
mod engine;

// High-level fluent API wrapping the core builder.
mod api;

// ndarray interop.
mod interop;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        AxisBounds, Field2D, GridSampler, GridSamplerBuilder as Grid, NumericRange,
        RollgridError, RollingMean, RollingMeanBuilder as Rolling, RollingResult, SeriesSample,
        TimeAxis,
    };
    pub use crate::interop::IntoArray2;
    pub use rollgrid::api::EmptyRangePolicy::{AllowEmpty, FailOnEmpty};
    pub use rollgrid::api::EmptyWindowFallback::{ReturnNone, ReturnZero};
    pub use rollgrid::prelude::formulas;
}

// Re-export the engine pass for direct use.
pub use engine::executor::*;
pub use interop::IntoArray2;
