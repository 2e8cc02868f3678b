//! Runtime-rank dense arrays backed by a single flat `Vec`.
//!
//! [`DynGrid`] picks its rank (2..=6) at construction and is indexed by
//! coordinate slices. Use it when the rank is data-driven; when the rank
//! is known at compile time, the `multidim-fixed` grids are the better
//! fit.

pub mod grid;
mod raw;

pub use grid::DynGrid;
pub use multidim_core::{DimError, Dimensional, Result, Shape};
