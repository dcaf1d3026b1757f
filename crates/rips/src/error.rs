//! Error type shared by graph construction and the complex entry points.

use std::fmt;

use crate::point::PointId;

/// Input-validation failures. Raised before any graph is built.
#[derive(Clone, Debug, PartialEq)]
pub enum ComplexError {
    /// `eta` is negative, NaN, or infinite.
    InvalidThreshold { eta: f64 },
    /// Two points share an identifier, so the vertex order is not total.
    DuplicateId { id: PointId },
    /// A coordinate of the point is NaN or infinite.
    NonFiniteCoordinate { id: PointId },
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { eta } => {
                write!(f, "invalid threshold: eta must be finite and >= 0 (got {eta})")
            }
            Self::DuplicateId { id } => write!(f, "duplicate point id {}", id.0),
            Self::NonFiniteCoordinate { id } => {
                write!(f, "point {} has a non-finite coordinate", id.0)
            }
        }
    }
}

impl std::error::Error for ComplexError {}
