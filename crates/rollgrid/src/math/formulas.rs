//! Chart formulas: dew point, clinical body weight, unit conversions.
//!
//! ## Purpose
//!
//! This module provides the closed-form formulas that the chart demos
//! sample over grids: dew-point temperature from air temperature and
//! relative humidity, and ideal/adjusted body weight from height and
//! actual weight. Temperature and mass conversions round out the set.
//!
//! ## Key concepts
//!
//! * **Totality**: All formulas are total over the reals; callers are
//!   responsible for physically sensible inputs (e.g., humidity in 0..100).
//! * **Generics**: Formulas are generic over `Float` precision.
//!
//! ## Non-goals
//!
//! * This module does not validate physical plausibility of inputs.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Kilograms per pound, clinical rounding.
///
/// Source: Devine-formula convention as used in adjusted-body-weight dosing
/// charts. Deliberately the rounded clinical factor, not the exact 0.45359237.
pub const KG_PER_LB: f64 = 0.454545;

/// Pounds per kilogram, clinical rounding.
///
/// Chart convention pairs this with [`KG_PER_LB`]; the two are rounded
/// independently and are not exact inverses.
pub const LB_PER_KG: f64 = 2.2;

/// Ideal-body-weight base at the reference height (lbs).
pub const IBW_BASE_LB: f64 = 105.0;

/// Ideal-body-weight slope per inch of height deviation (lbs/in).
pub const IBW_SLOPE_LB_PER_IN: f64 = 5.0;

/// Reference height for the ideal-body-weight formula (inches, i.e., 5 ft).
pub const IBW_REFERENCE_HEIGHT_IN: f64 = 60.0;

/// Fraction of the excess over ideal weight counted toward adjusted weight.
pub const ABW_ADJUSTMENT_FACTOR: f64 = 0.25;

/// Exponent applied to fractional relative humidity in the dew-point blend.
///
/// Source: Wanielista, Kersten & Eaglin, "Hydrology: Water Quantity and
/// Quality Control", 2nd ed.
pub const DEW_POINT_RH_EXPONENT: f64 = 0.125;

/// Offset of the dew-point humidity blend (degrees C).
pub const DEW_POINT_BLEND_OFFSET_C: f64 = 112.0;

/// Air-temperature gain inside the dew-point humidity blend.
pub const DEW_POINT_BLEND_GAIN: f64 = 0.9;

/// Residual air-temperature contribution outside the blend.
pub const DEW_POINT_RESIDUAL_GAIN: f64 = 0.1;

// ============================================================================
// Meteorological Formulas
// ============================================================================

/// Dew-point temperature (degrees C) from air temperature (degrees C) and
/// relative humidity (percent).
///
/// Empirical power-law blend: `(rh/100)^0.125 * (112 + 0.9*t) + 0.1*t - 112`.
pub fn dew_point_temp<T: Float>(air_temp_c: T, rel_humidity_pct: T) -> T {
    let rh = rel_humidity_pct / T::from(100.0).unwrap();
    let offset = T::from(DEW_POINT_BLEND_OFFSET_C).unwrap();
    let blend = offset + T::from(DEW_POINT_BLEND_GAIN).unwrap() * air_temp_c;
    let residual = T::from(DEW_POINT_RESIDUAL_GAIN).unwrap() * air_temp_c;
    rh.powf(T::from(DEW_POINT_RH_EXPONENT).unwrap()) * blend + residual - offset
}

// ============================================================================
// Clinical Body-Weight Formulas
// ============================================================================

/// Ideal body weight (kg) from height in inches.
///
/// Linear in the absolute deviation from the 60-inch reference height,
/// converted from pounds with the rounded clinical factor.
pub fn ideal_body_weight_kg<T: Float>(height_in: T) -> T {
    let deviation = (T::from(IBW_REFERENCE_HEIGHT_IN).unwrap() - height_in).abs();
    let lbs = T::from(IBW_BASE_LB).unwrap() + T::from(IBW_SLOPE_LB_PER_IN).unwrap() * deviation;
    T::from(KG_PER_LB).unwrap() * lbs
}

/// Adjusted body weight (kg): ideal weight plus a quarter of the excess of
/// the actual weight over it.
pub fn adjusted_body_weight_kg<T: Float>(height_in: T, body_weight: T) -> T {
    let ideal = ideal_body_weight_kg(height_in);
    T::from(ABW_ADJUSTMENT_FACTOR).unwrap() * (body_weight - ideal) + ideal
}

// ============================================================================
// Unit Conversions
// ============================================================================

/// Convert Fahrenheit to Celsius.
pub fn fahrenheit_to_celsius<T: Float>(temperature: T) -> T {
    (temperature - T::from(32.0).unwrap()) / T::from(1.8).unwrap()
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit<T: Float>(temperature: T) -> T {
    temperature * T::from(1.8).unwrap() + T::from(32.0).unwrap()
}

/// Convert kilograms to pounds (chart convention).
pub fn kg_to_lb<T: Float>(mass: T) -> T {
    mass * T::from(LB_PER_KG).unwrap()
}

/// Convert pounds to kilograms (chart convention).
pub fn lb_to_kg<T: Float>(mass: T) -> T {
    mass * T::from(KG_PER_LB).unwrap()
}
