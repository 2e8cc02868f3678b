//! Primitive element aliases.
//!
//! The classic surface of this library: one array family per primitive
//! element type, ranks 2 through 6. Aliases only; every family is the same
//! generic grid underneath.

use crate::grid::{Grid2, Grid3, Grid4, Grid5, Grid6};

pub type ByteGrid2 = Grid2<i8>;
pub type ByteGrid3 = Grid3<i8>;
pub type ByteGrid4 = Grid4<i8>;
pub type ByteGrid5 = Grid5<i8>;
pub type ByteGrid6 = Grid6<i8>;

pub type ShortGrid2 = Grid2<i16>;
pub type ShortGrid3 = Grid3<i16>;
pub type ShortGrid4 = Grid4<i16>;
pub type ShortGrid5 = Grid5<i16>;
pub type ShortGrid6 = Grid6<i16>;

pub type LongGrid2 = Grid2<i64>;
pub type LongGrid3 = Grid3<i64>;
pub type LongGrid4 = Grid4<i64>;
pub type LongGrid5 = Grid5<i64>;
pub type LongGrid6 = Grid6<i64>;

pub type FloatGrid2 = Grid2<f32>;
pub type FloatGrid3 = Grid3<f32>;
pub type FloatGrid4 = Grid4<f32>;
pub type FloatGrid5 = Grid5<f32>;
pub type FloatGrid6 = Grid6<f32>;

pub type DoubleGrid2 = Grid2<f64>;
pub type DoubleGrid3 = Grid3<f64>;
pub type DoubleGrid4 = Grid4<f64>;
pub type DoubleGrid5 = Grid5<f64>;
pub type DoubleGrid6 = Grid6<f64>;
