//! Error types for angular input validation.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Result alias for fallible spatial math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Which geographic quantity failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors from validated angular operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    /// Both components of a direction vector are within
    /// [`TOLERANCE`](crate::TOLERANCE) of zero.
    #[error("invalid argument `{name}`: direction is undefined")]
    InvalidArgument { name: String },

    /// Input is NaN or outside the symmetric bound `[-max, max]`.
    #[error("input {coordinate} {value} is out of range [-{max}, {max}] (argument `{name}`)")]
    OutOfRange {
        coordinate: Coordinate,
        name: String,
        value: f64,
        max: f64,
    },
}

impl MathError {
    /// Label of the argument that was rejected.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidArgument { name } | Self::OutOfRange { name, .. } => name,
        }
    }
}
