//! Serialized form of a dynamic grid, validated on deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawParts<T> {
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<T>,
}
