//! Errors shared by all multidim array types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimError {
    #[error("rank {rank} out of range: arrays must have between 2 and 6 dimensions")]
    RankOutOfRange { rank: usize },

    #[error("axis {axis} has length 0: all dimensions must be positive")]
    ZeroAxis { axis: usize },

    #[error("total element count overflows usize")]
    SizeOverflow,

    #[error("coordinate rank mismatch: expected {expected} indices, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("index {index} out of bounds for axis {axis} (axis length {len})")]
    OutOfBounds {
        axis: usize,
        index: usize,
        len: usize,
    },

    #[error("flat data length mismatch: shape requires {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, DimError>;
