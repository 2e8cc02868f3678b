//! The runtime-rank grid.

use crate::raw::RawParts;
use multidim_core::{DimError, Dimensional, Result, Shape};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tracing::trace;

/// Dense array whose rank (2..=6) is chosen at construction.
///
/// Elements live in one row-major allocation; coordinates are slices of
/// length `rank()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawParts<T>",
    into = "RawParts<T>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: serde::de::Deserialize<'de>"
    )
)]
pub struct DynGrid<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Clone + Default> DynGrid<T> {
    /// Creates a grid with every element set to `T::default()`.
    pub fn zeroed(dims: &[usize]) -> Result<Self> {
        Self::filled(T::default(), dims)
    }

    /// Resets every element to `T::default()`.
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }
}

impl<T: Clone> DynGrid<T> {
    /// Creates a grid with every element set to `value`.
    pub fn filled(value: T, dims: &[usize]) -> Result<Self> {
        let shape = Shape::new(dims)?;
        let data = vec![value; shape.len()];
        Ok(Self { shape, data })
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        trace!(shape = %self.shape, "fill");
        self.data.fill(value);
    }
}

impl<T> DynGrid<T> {
    /// Wraps an existing flat buffer, row-major, last axis fastest.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if the buffer does not hold exactly one
    /// element per coordinate.
    pub fn from_vec(data: Vec<T>, dims: &[usize]) -> Result<Self> {
        let shape = Shape::new(dims)?;
        if data.len() != shape.len() {
            return Err(DimError::LengthMismatch {
                expected: shape.len(),
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Checked element access.
    pub fn get(&self, coords: &[usize]) -> Result<&T> {
        let flat = self.shape.offset(coords)?;
        Ok(&self.data[flat])
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, coords: &[usize]) -> Result<&mut T> {
        let flat = self.shape.offset(coords)?;
        Ok(&mut self.data[flat])
    }

    /// Checked element write.
    pub fn set(&mut self, coords: &[usize], value: T) -> Result<()> {
        let flat = self.shape.offset(coords)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Element access without per-axis validation.
    ///
    /// A coordinate outside its axis yields a flat offset past the buffer,
    /// where slice indexing panics.
    pub fn get_raw(&self, coords: &[usize]) -> &T {
        &self.data[self.shape.offset_raw(coords)]
    }

    /// Element write without per-axis validation.
    pub fn set_raw(&mut self, coords: &[usize], value: T) {
        let flat = self.shape.offset_raw(coords);
        self.data[flat] = value;
    }

    /// Length of one axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    pub fn dim(&self, axis: usize) -> usize {
        self.shape.dim(axis)
    }

    /// The flat element buffer, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the flat element buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the grid, returning the flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutably iterates elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Dimensional for DynGrid<T> {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl<T> Index<&[usize]> for DynGrid<T> {
    type Output = T;

    fn index(&self, coords: &[usize]) -> &T {
        match self.get(coords) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IntoIterator for DynGrid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynGrid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for DynGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynGrid{{shape={}, data=[", self.shape)?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]}}")
    }
}

impl<T> TryFrom<RawParts<T>> for DynGrid<T> {
    type Error = DimError;

    fn try_from(raw: RawParts<T>) -> Result<Self> {
        Self::from_vec(raw.data, &raw.shape)
    }
}

impl<T> From<DynGrid<T>> for RawParts<T> {
    fn from(grid: DynGrid<T>) -> Self {
        Self {
            shape: grid.shape.dims().to_vec(),
            data: grid.data,
        }
    }
}
