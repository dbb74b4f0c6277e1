//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a tile within a tile catalog.
///
/// Ids are chosen by the catalog owner and need not be contiguous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a face prototype (a reusable face type) within a catalog.
///
/// `FacePrototypeId(0)` is reserved as the null prototype; valid ids start
/// at [`FacePrototypeId::FIRST_VALID`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacePrototypeId(pub u32);

impl FacePrototypeId {
    /// The reserved "no prototype" id.
    pub const NULL: Self = Self(0);
    /// The first id a catalog may assign to a real prototype.
    pub const FIRST_VALID: Self = Self(1);

    /// Whether this is the reserved null id.
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl fmt::Display for FacePrototypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FacePrototypeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An opaque symmetry-class identifier for one corner or edge of a face.
///
/// Two touching faces are compatible when their corner ids and edge ids
/// agree point for point. Ids below [`PointId::NULL_BLOCK_LEN`] belong to
/// the reserved null block, handed to faces whose prototype is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

impl PointId {
    /// Number of ids in one prototype block (and in the null block).
    pub const BLOCK_LEN: u32 = 4;
    /// The null block occupies `0..NULL_BLOCK_LEN`.
    pub const NULL_BLOCK_LEN: u32 = Self::BLOCK_LEN;

    /// Whether this id falls in the reserved null block.
    pub fn is_null(self) -> bool {
        self.0 < Self::NULL_BLOCK_LEN
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
