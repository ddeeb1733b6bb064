//! Validation of geographic inputs given in degrees.
//!
//! Both validators reject NaN and values outside `[-max, max]` before any
//! conversion, then return radians ready for projection math.

use std::f64::consts::FRAC_PI_2;

use crate::angle::clamp;
use crate::error::{Coordinate, MathError, Result};
use crate::wrap::normalize_longitude_rad;

/// Conventional latitude bound in degrees.
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// Conventional longitude bound in degrees.
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Validate a latitude in degrees and convert it to radians in `[-π/2, π/2]`.
///
/// # Errors
/// [`MathError::OutOfRange`] if `lat_deg` is NaN or outside `[-max, max]`.
pub fn input_lat(lat_deg: f64, max: f64, name: &str) -> Result<f64> {
    check_range(Coordinate::Latitude, lat_deg, max, name)?;
    // Conversion can overshoot π/2 by an ulp.
    Ok(clamp(FRAC_PI_2, lat_deg.to_radians()))
}

/// Validate a longitude in degrees and convert it to radians in `[-π, π)`.
///
/// `max` may exceed 180 to accept unwrapped input; the result is always
/// normalized.
///
/// # Errors
/// [`MathError::OutOfRange`] if `long_deg` is NaN or outside `[-max, max]`.
pub fn input_long(long_deg: f64, max: f64, name: &str) -> Result<f64> {
    check_range(Coordinate::Longitude, long_deg, max, name)?;
    Ok(normalize_longitude_rad(long_deg.to_radians()))
}

fn check_range(coordinate: Coordinate, value: f64, max: f64, name: &str) -> Result<()> {
    if value.is_nan() || value < -max || value > max {
        tracing::debug!(%coordinate, argument = name, value, max, "input out of range");
        return Err(MathError::OutOfRange {
            coordinate,
            name: name.into(),
            value,
            max,
        });
    }
    Ok(())
}
