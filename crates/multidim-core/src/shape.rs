//! Row-major shape and offset math for dense multidimensional arrays.

use crate::error::{DimError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Minimum supported rank (number of dimensions).
pub const MIN_RANK: usize = 2;

/// Maximum supported rank.
pub const MAX_RANK: usize = 6;

/// Per-axis lengths of a dense row-major array, with cached strides.
///
/// Axes beyond `rank` are padded with 1 so the stride math never branches
/// on rank. The last axis always varies fastest (stride 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Shape {
    dims: [usize; MAX_RANK],
    strides: [usize; MAX_RANK],
    rank: usize,
    len: usize,
}

impl Shape {
    /// Builds a shape from per-axis lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is outside 2..=6, any axis has length
    /// zero, or the total element count overflows `usize`.
    pub fn new(dims: &[usize]) -> Result<Self> {
        let rank = dims.len();
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(DimError::RankOutOfRange { rank });
        }

        let mut padded = [1usize; MAX_RANK];
        let mut len = 1usize;
        for (axis, &d) in dims.iter().enumerate() {
            if d == 0 {
                return Err(DimError::ZeroAxis { axis });
            }
            len = len.checked_mul(d).ok_or(DimError::SizeOverflow)?;
            padded[axis] = d;
        }

        // Row-major: stride of the last axis is 1, each axis to the left
        // covers the full block to its right.
        let mut strides = [1usize; MAX_RANK];
        for axis in (0..rank.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * padded[axis + 1];
        }

        let shape = Self {
            dims: padded,
            strides,
            rank,
            len,
        };
        trace!(shape = %shape, len, "shape constructed");
        Ok(shape)
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: every axis of a constructed shape is positive.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Per-axis lengths.
    pub fn dims(&self) -> &[usize] {
        &self.dims[..self.rank]
    }

    /// Length of one axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    pub fn dim(&self, axis: usize) -> usize {
        self.dims()[axis]
    }

    /// Row-major strides, one per axis.
    pub fn strides(&self) -> &[usize] {
        &self.strides[..self.rank]
    }

    /// Computes the flat offset of a coordinate, validating rank and each
    /// axis in order.
    ///
    /// # Errors
    ///
    /// Returns `RankMismatch` if the coordinate arity differs from the
    /// rank, or `OutOfBounds` naming the first offending axis.
    pub fn offset(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.rank {
            return Err(DimError::RankMismatch {
                expected: self.rank,
                got: coords.len(),
            });
        }
        let mut flat = 0usize;
        for (axis, (&index, (&len, &stride))) in coords
            .iter()
            .zip(self.dims().iter().zip(self.strides()))
            .enumerate()
        {
            if index >= len {
                return Err(DimError::OutOfBounds { axis, index, len });
            }
            flat += index * stride;
        }
        Ok(flat)
    }

    /// Computes the flat offset without validating individual coordinates.
    ///
    /// Out-of-range coordinates produce an offset past the end of any
    /// buffer of `len()` elements; callers indexing a slice with it will
    /// panic there instead.
    pub fn offset_raw(&self, coords: &[usize]) -> usize {
        coords
            .iter()
            .zip(self.strides())
            .map(|(&index, &stride)| index * stride)
            .sum()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, d) in self.dims().iter().enumerate() {
            if axis > 0 {
                write!(f, "x")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = DimError;

    fn try_from(dims: Vec<usize>) -> Result<Self> {
        Self::new(&dims)
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims().to_vec()
    }
}
