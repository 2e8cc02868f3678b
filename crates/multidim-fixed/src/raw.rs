//! Serialized form of a grid: shape plus flat data, validated on the way
//! back in.

use serde::{Deserialize, Serialize};

/// Wire representation shared by every grid rank. Deserialization goes
/// through `TryFrom<RawParts<T>>` so a hand-edited payload cannot produce
/// a grid whose data length disagrees with its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawParts<T> {
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<T>,
}
