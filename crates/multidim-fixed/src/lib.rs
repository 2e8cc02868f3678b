//! Fixed-rank dense arrays backed by a single flat `Vec`.
//!
//! One type per rank, [`Grid2`] through [`Grid6`], all generic over the
//! element type. Elements live in one row-major allocation; coordinates
//! are mapped to flat offsets through [`multidim_core::Shape`].
//!
//! Each rank offers the same surface:
//! - `new` / `filled` / `from_vec` construction
//! - checked `get` / `get_mut` / `set` returning [`multidim_core::DimError`]
//! - `get_raw` / `set_raw` skipping per-axis validation
//! - `fill`, `clear`, flat-slice access, tuple `Index`/`IndexMut` sugar
//!
//! Primitive aliases for the classic element families live in [`aliases`].

pub mod aliases;
mod fmt;
pub mod grid;
mod raw;

pub use grid::{Grid2, Grid3, Grid4, Grid5, Grid6};
pub use multidim_core::{DimError, Dimensional, Result, Shape};
