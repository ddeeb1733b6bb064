//! Floored remainder and longitude wrapping.
//!
//! Longitudes are canonicalized into the half-open ranges `[-180, 180)`
//! degrees and `[-π, π)` radians. The closed form
//! `remainder(lon + half, full) - half` is equivalent to repeatedly adding or
//! subtracting a full turn until the value lands in range.

use std::f64::consts::{PI, TAU};

/// Floored remainder: `x - floor(x / y) * y`.
///
/// For `y > 0` the result `r` satisfies `x = k * y + r` for some integer `k`
/// and `0 <= r < y`, unlike `%` which keeps the sign of `x`.
pub fn remainder(x: f64, y: f64) -> f64 {
    if y <= 0.0 {
        return x - (x / y).floor() * y;
    }
    // `%` is exact fmod, so large |x| keeps its true residue.
    let mut r = x % y;
    if r < 0.0 {
        r += y;
    }
    // Tiny negative r rounds up to exactly y.
    if r >= y {
        r -= y;
    }
    r
}

/// Wrap a longitude in degrees into `[-180, 180)`.
pub fn normalize_longitude_deg(longitude: f64) -> f64 {
    if (-180.0..180.0).contains(&longitude) {
        longitude
    } else {
        remainder(longitude + 180.0, 360.0) - 180.0
    }
}

/// Wrap a longitude in radians into `[-π, π)`.
pub fn normalize_longitude_rad(longitude: f64) -> f64 {
    if (-PI..PI).contains(&longitude) {
        longitude
    } else {
        remainder(longitude + PI, TAU) - PI
    }
}
