//! Construction errors

use crate::point::Point;

/// Everything that can stop a tree from being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// (MismatchedInputLengths) Feature-space and real-space lists differ in length
    #[error(
        "(MismatchedInputLengths) {feature} feature-space coordinates but {real} real-space coordinates"
    )]
    MismatchedInputLengths { feature: usize, real: usize },
    /// (InvalidCoordinate) A coordinate is NaN or infinite
    #[error("(InvalidCoordinate) The coordinate {point} at index {index} has a NaN or infinite")]
    InvalidCoordinate { index: usize, point: Point },
}
