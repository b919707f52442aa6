pub mod utils;
pub mod vector;

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(InvalidArgument),
    #[error("Zero Vector Error: {0}")]
    ZeroVector(ZeroVectorContext),
    #[error("Dimension Mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Why a set of coordinates was refused at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    EmptyCoordinates,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::EmptyCoordinates => f.write_str("The coordinates must be nonempty"),
        }
    }
}

/// The operation that ran into a zero-magnitude vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroVectorContext {
    Normalization,
    AngleComputation,
}

impl fmt::Display for ZeroVectorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroVectorContext::Normalization => f.write_str("Cannot normalize zero vector"),
            ZeroVectorContext::AngleComputation => {
                f.write_str("Cannot compute angle with zero vector")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{generate_random_vectors, radians_to_degrees};
pub use vector::{AngleUnit, Vector, DEFAULT_TOLERANCE};
