//! Core abstractions shared by the multidim array crates.
//!
//! Provides the vocabulary every array type builds on:
//! - [`Shape`]: per-axis lengths, cached row-major strides, total length
//! - [`DimError`]: the single error type of the workspace
//! - [`Dimensional`]: shape introspection implemented by all array types
//!
//! Concrete containers live in `multidim-fixed` (compile-time rank) and
//! `multidim-dyn` (runtime rank).

pub mod dimensional;
pub mod error;
pub mod shape;

pub use dimensional::Dimensional;
pub use error::{DimError, Result};
pub use shape::{MAX_RANK, MIN_RANK, Shape};
