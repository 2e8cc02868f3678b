//! The `Grid2`..`Grid6` types, generated once per rank.
//!
//! Every rank shares one implementation: a single macro expands the full
//! surface per arity, and element types stay generic.

use crate::raw::RawParts;
use multidim_core::{DimError, Dimensional, Result, Shape};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Substitutes `usize` for an axis identifier when building tuple types.
macro_rules! axis_usize {
    ($axis:ident) => {
        usize
    };
}

macro_rules! fixed_grid {
    ($(#[$meta:meta])* $name:ident, $rank:literal, [$($axis:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(
            try_from = "RawParts<T>",
            into = "RawParts<T>",
            bound(
                serialize = "T: Serialize + Clone",
                deserialize = "T: serde::de::Deserialize<'de>"
            )
        )]
        pub struct $name<T> {
            shape: Shape,
            data: Vec<T>,
        }

        impl<T: Clone + Default> $name<T> {
            /// Creates a grid with every element set to `T::default()`.
            pub fn new($($axis: usize),+) -> Result<Self> {
                Self::filled(T::default(), $($axis),+)
            }

            /// Resets every element to `T::default()`.
            pub fn clear(&mut self) {
                self.data.fill(T::default());
            }
        }

        impl<T: Clone> $name<T> {
            /// Creates a grid with every element set to `value`.
            pub fn filled(value: T, $($axis: usize),+) -> Result<Self> {
                let shape = Shape::new(&[$($axis),+])?;
                let data = vec![value; shape.len()];
                Ok(Self { shape, data })
            }

            /// Overwrites every element with `value`.
            pub fn fill(&mut self, value: T) {
                trace!(shape = %self.shape, "fill");
                self.data.fill(value);
            }
        }

        impl<T> $name<T> {
            /// Wraps an existing flat buffer, row-major, last axis fastest.
            ///
            /// # Errors
            ///
            /// Returns `LengthMismatch` if the buffer does not hold exactly
            /// one element per coordinate.
            pub fn from_vec(data: Vec<T>, $($axis: usize),+) -> Result<Self> {
                let shape = Shape::new(&[$($axis),+])?;
                if data.len() != shape.len() {
                    return Err(DimError::LengthMismatch {
                        expected: shape.len(),
                        got: data.len(),
                    });
                }
                Ok(Self { shape, data })
            }

            /// Checked element access.
            pub fn get(&self, $($axis: usize),+) -> Result<&T> {
                let flat = self.shape.offset(&[$($axis),+])?;
                Ok(&self.data[flat])
            }

            /// Checked mutable element access.
            pub fn get_mut(&mut self, $($axis: usize),+) -> Result<&mut T> {
                let flat = self.shape.offset(&[$($axis),+])?;
                Ok(&mut self.data[flat])
            }

            /// Checked element write.
            pub fn set(&mut self, $($axis: usize),+, value: T) -> Result<()> {
                let flat = self.shape.offset(&[$($axis),+])?;
                self.data[flat] = value;
                Ok(())
            }

            /// Element access without per-axis validation.
            ///
            /// A coordinate outside its axis yields a flat offset past the
            /// buffer, where slice indexing panics.
            pub fn get_raw(&self, $($axis: usize),+) -> &T {
                &self.data[self.shape.offset_raw(&[$($axis),+])]
            }

            /// Element write without per-axis validation.
            pub fn set_raw(&mut self, $($axis: usize),+, value: T) {
                let flat = self.shape.offset_raw(&[$($axis),+]);
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

        impl<T> Dimensional for $name<T> {
            fn shape(&self) -> &Shape {
                &self.shape
            }
        }

        impl<T> std::ops::Index<($(axis_usize!($axis)),+)> for $name<T> {
            type Output = T;

            fn index(&self, ($($axis),+): ($(axis_usize!($axis)),+)) -> &T {
                match self.get($($axis),+) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T> std::ops::IndexMut<($(axis_usize!($axis)),+)> for $name<T> {
            fn index_mut(
                &mut self,
                ($($axis),+): ($(axis_usize!($axis)),+),
            ) -> &mut T {
                match self.shape.offset(&[$($axis),+]) {
                    Ok(flat) => &mut self.data[flat],
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T> IntoIterator for $name<T> {
            type Item = T;
            type IntoIter = std::vec::IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.into_iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }

        impl<'a, T> IntoIterator for &'a mut $name<T> {
            type Item = &'a mut T;
            type IntoIter = std::slice::IterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter_mut()
            }
        }

        impl<T> TryFrom<RawParts<T>> for $name<T> {
            type Error = DimError;

            fn try_from(raw: RawParts<T>) -> Result<Self> {
                if raw.shape.len() != $rank {
                    return Err(DimError::RankMismatch {
                        expected: $rank,
                        got: raw.shape.len(),
                    });
                }
                let shape = Shape::new(&raw.shape)?;
                if raw.data.len() != shape.len() {
                    return Err(DimError::LengthMismatch {
                        expected: shape.len(),
                        got: raw.data.len(),
                    });
                }
                Ok(Self {
                    shape,
                    data: raw.data,
                })
            }
        }

        impl<T> From<$name<T>> for RawParts<T> {
            fn from(grid: $name<T>) -> Self {
                Self {
                    shape: grid.shape.dims().to_vec(),
                    data: grid.data,
                }
            }
        }
    };
}

fixed_grid!(
    /// Dense 2D array over a flat row-major buffer.
    Grid2, 2, [x, y]
);
fixed_grid!(
    /// Dense 3D array over a flat row-major buffer.
    Grid3, 3, [x, y, z]
);
fixed_grid!(
    /// Dense 4D array over a flat row-major buffer.
    Grid4, 4, [x, y, z, w]
);
fixed_grid!(
    /// Dense 5D array over a flat row-major buffer.
    Grid5, 5, [x, y, z, w, u]
);
fixed_grid!(
    /// Dense 6D array over a flat row-major buffer.
    Grid6, 6, [x, y, z, w, u, v]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let grid: Grid2<i64> = Grid2::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_rejects_zero_axis() {
        assert_eq!(
            Grid2::<i64>::new(0, 3).unwrap_err(),
            DimError::ZeroAxis { axis: 0 }
        );
        assert_eq!(
            Grid3::<i64>::new(3, 3, 0).unwrap_err(),
            DimError::ZeroAxis { axis: 2 }
        );
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid: Grid3<i64> = Grid3::new(2, 3, 4).unwrap();
        grid.set(1, 2, 3, 42).unwrap();
        assert_eq!(*grid.get(1, 2, 3).unwrap(), 42);
        assert_eq!(*grid.get(0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_get_out_of_bounds_names_axis() {
        let grid: Grid2<i64> = Grid2::new(3, 3).unwrap();
        assert_eq!(
            grid.get(0, 3).unwrap_err(),
            DimError::OutOfBounds {
                axis: 1,
                index: 3,
                len: 3
            }
        );
    }

    #[test]
    fn test_raw_access_within_bounds() {
        let mut grid: Grid2<i64> = Grid2::new(3, 3).unwrap();
        grid.set_raw(2, 1, 99);
        assert_eq!(*grid.get_raw(2, 1), 99);
        assert_eq!(*grid.get(2, 1).unwrap(), 99);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_raw_access_past_buffer_panics() {
        let grid: Grid2<i64> = Grid2::new(3, 3).unwrap();
        // flat offset 3 * 3 + 0 = 9, one past the buffer
        let _ = grid.get_raw(3, 0);
    }

    #[test]
    fn test_index_sugar() {
        let mut grid: Grid4<i32> = Grid4::new(2, 2, 2, 2).unwrap();
        grid[(1, 0, 1, 0)] = 7;
        assert_eq!(grid[(1, 0, 1, 0)], 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds for axis 0")]
    fn test_index_sugar_panics_out_of_bounds() {
        let grid: Grid2<i32> = Grid2::new(2, 2).unwrap();
        let _ = grid[(2, 0)];
    }

    #[test]
    fn test_fill_and_clear() {
        let mut grid: Grid2<i64> = Grid2::new(2, 2).unwrap();
        grid.fill(5);
        assert!(grid.iter().all(|&v| v == 5));
        grid.clear();
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_vec_length_checked() {
        let grid = Grid2::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(*grid.get(1, 2).unwrap(), 6);

        assert_eq!(
            Grid2::from_vec(vec![1, 2, 3], 2, 3).unwrap_err(),
            DimError::LengthMismatch {
                expected: 6,
                got: 3
            }
        );
    }

    #[test]
    fn test_clone_is_deep_copy() {
        let mut grid: Grid2<i64> = Grid2::new(2, 2).unwrap();
        grid.set(0, 0, 1).unwrap();
        let copy = grid.clone();
        grid.set(0, 0, 9).unwrap();
        assert_eq!(*copy.get(0, 0).unwrap(), 1);
        assert_eq!(*grid.get(0, 0).unwrap(), 9);
    }

    #[test]
    fn test_eq_covers_shape_and_data() {
        let a = Grid2::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        let b = Grid2::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
        assert_ne!(a, b);
        let c = Grid2::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_generic_elements_with_option() {
        let mut grid: Grid2<Option<String>> = Grid2::new(2, 2).unwrap();
        grid.set(0, 1, Some("hello".into())).unwrap();
        assert_eq!(grid.get(0, 1).unwrap().as_deref(), Some("hello"));
        grid.clear();
        assert!(grid.get(0, 1).unwrap().is_none());
    }

    #[test]
    fn test_rank_six_round_trip() {
        let mut grid: Grid6<i64> = Grid6::new(2, 2, 2, 2, 2, 2).unwrap();
        grid.set(1, 1, 1, 1, 1, 1, 64).unwrap();
        assert_eq!(*grid.get(1, 1, 1, 1, 1, 1).unwrap(), 64);
        assert_eq!(grid.len(), 64);
        assert_eq!(grid.rank(), 6);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid: Grid2<i32> = Grid2::new(2, 3).unwrap();
        let mut next = 0;
        for x in 0..2 {
            for y in 0..3 {
                grid.set(x, y, next).unwrap();
                next += 1;
            }
        }
        assert_eq!(grid.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = Grid2::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid2<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_serde_rejects_bad_payloads() {
        // wrong rank for Grid2
        let err = serde_json::from_str::<Grid2<i32>>(
            r#"{"shape":[2,2,2],"data":[0,0,0,0,0,0,0,0]}"#,
        );
        assert!(err.is_err());

        // data length disagrees with shape
        let err = serde_json::from_str::<Grid2<i32>>(r#"{"shape":[2,2],"data":[1,2,3]}"#);
        assert!(err.is_err());
    }
}
