//! ndarray interop for sampled fields.
//!
//! Downstream numeric consumers usually want the field as an
//! `ndarray::Array2`; the conversion is a move of the row-major buffer, not
//! a copy.

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// Internal dependencies
use rollgrid::api::Field2D;

// ============================================================================
// Field Conversion
// ============================================================================

/// Conversion of a sampled field into an `ndarray` matrix.
pub trait IntoArray2<T> {
    /// Consume the field, yielding a `(rows, cols)` matrix.
    fn into_array2(self) -> Array2<T>;
}

impl<T: Float> IntoArray2<T> for Field2D<T> {
    fn into_array2(self) -> Array2<T> {
        let (data, rows, cols) = self.into_parts();
        // A field is always fully populated, so the shape cannot mismatch.
        Array2::from_shape_vec((rows, cols), data)
            .expect("row-major field buffer matches its dimensions")
    }
}
