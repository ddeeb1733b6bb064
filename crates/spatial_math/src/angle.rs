//! Arctangent, clamping and small scalar helpers.

use std::f64::consts::PI;

use crate::error::{MathError, Result};

/// Near-zero threshold used when deciding whether a direction is defined.
pub const TOLERANCE: f64 = 1e-14;

/// Two-argument arctangent that rejects degenerate directions.
///
/// Fails with [`MathError::InvalidArgument`] tagged with `name` when both
/// `|y|` and `|x|` are within [`TOLERANCE`] of zero. Otherwise identical to
/// [`atan2`].
pub fn atan2_checked(y: f64, x: f64, name: &str) -> Result<f64> {
    if y.abs() <= TOLERANCE && x.abs() <= TOLERANCE {
        tracing::debug!(argument = name, y, x, "degenerate direction");
        return Err(MathError::InvalidArgument { name: name.into() });
    }
    Ok(atan2(y, x))
}

/// Two-argument arctangent in `[-π, π)`.
///
/// A raw result of exactly `+π` is returned as `-π`, so the boundary has a
/// single representation.
pub fn atan2(y: f64, x: f64) -> f64 {
    let a = y.atan2(x);
    if a == PI { -PI } else { a }
}

/// Restrict `a` to `[-limit, limit]`. `limit` must be non-negative.
pub fn clamp(limit: f64, a: f64) -> f64 {
    if a > limit {
        limit
    } else if a < -limit {
        -limit
    } else {
        a
    }
}

/// `a * a`.
pub fn square(a: f64) -> f64 {
    a * a
}
