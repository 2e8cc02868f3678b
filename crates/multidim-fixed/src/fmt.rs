//! Human-readable layouts for the low ranks.
//!
//! Rank 2 prints one bracketed row per x, rank 3 groups rows under layer
//! headers. Higher ranks have no sensible 2D rendering and only derive
//! `Debug`.

use crate::grid::{Grid2, Grid3};
use std::fmt;

impl<T: fmt::Display> fmt::Display for Grid2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid2{{")?;
        for x in 0..self.dim(0) {
            write!(f, " [")?;
            for y in 0..self.dim(1) {
                if y > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get_raw(x, y))?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Display> fmt::Display for Grid3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid3{{")?;
        for x in 0..self.dim(0) {
            writeln!(f, "  Layer {x}:")?;
            for y in 0..self.dim(1) {
                write!(f, "    [")?;
                for z in 0..self.dim(2) {
                    if z > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.get_raw(x, y, z))?;
                }
                writeln!(f, "]")?;
            }
        }
        write!(f, "}}")
    }
}
