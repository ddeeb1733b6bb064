//! Angular and geodetic helpers for projection and geodesic routines.
//!
//! This crate provides:
//! - A two-argument arctangent with a single representation of the `±π` boundary
//! - Latitude/longitude validation that converts degrees to radians
//! - Floored remainder and longitude wrapping into `[-180, 180)` / `[-π, π)`
//!
//! All functions are pure and operate on `f64` scalars.

pub mod angle;
pub mod error;
pub mod input;
pub mod wrap;

pub use angle::{TOLERANCE, atan2, atan2_checked, clamp, square};
pub use error::{Coordinate, MathError, Result};
pub use input::{MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG, input_lat, input_long};
pub use wrap::{normalize_longitude_deg, normalize_longitude_rad, remainder};
