//! Reusable face types.

use wfc3d_core::{FacePoint, PointId};

use crate::face::FaceIdentifiers;

/// Symmetry class of one corner or edge within a prototype.
///
/// Points with the same class are interchangeable: a face whose four
/// corners are all [`PointSymmetry::A`] matches itself under any rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PointSymmetry {
    #[default]
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl PointSymmetry {
    /// Offset of this class within a prototype's id block.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// A type of face that tiles can have.
///
/// Assigns a [`PointSymmetry`] to each corner and each edge. Corners and
/// edges are compared separately, so a corner never matches an edge even
/// when they share a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacePrototype {
    /// Display name.
    pub nickname: String,
    /// Corner classes, indexed by [`FacePoint::index`].
    pub corners: [PointSymmetry; 4],
    /// Edge classes, indexed by [`FacePoint::index`].
    pub edges: [PointSymmetry; 4],
    /// Display names for the four classes.
    pub point_nicknames: [String; 4],
}

impl Default for FacePrototype {
    fn default() -> Self {
        use PointSymmetry::*;
        Self {
            nickname: "New Face".to_string(),
            corners: [A, B, C, D],
            edges: [A, B, C, D],
            point_nicknames: ["a", "b", "c", "d"].map(String::from),
        }
    }
}

impl FacePrototype {
    /// A prototype with no symmetry: every corner and edge is distinct.
    pub fn asymmetric(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            ..Self::default()
        }
    }

    /// A prototype symmetric under all eight face transforms.
    pub fn uniform(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            corners: [PointSymmetry::A; 4],
            edges: [PointSymmetry::A; 4],
            ..Self::default()
        }
    }

    /// Class of a corner.
    pub fn corner(&self, p: FacePoint) -> PointSymmetry {
        self.corners[p.index()]
    }

    /// Class of an edge.
    pub fn edge(&self, p: FacePoint) -> PointSymmetry {
        self.edges[p.index()]
    }

    /// Concrete ids for this prototype, given the first id of its block.
    pub fn unwrap(&self, first: PointId) -> FaceIdentifiers {
        FaceIdentifiers {
            corners: self.corners.map(|s| PointId(first.0 + s.index())),
            edges: self.edges.map(|s| PointId(first.0 + s.index())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_offsets_by_block() {
        let ids = FacePrototype::default().unwrap(PointId(8));
        assert_eq!(ids.corners.map(|p| p.0), [8, 9, 10, 11]);
        assert_eq!(ids.edges.map(|p| p.0), [8, 9, 10, 11]);
        assert!(!ids.is_null());
    }

    #[test]
    fn uniform_prototype_is_one_class() {
        let ids = FacePrototype::uniform("flat").unwrap(PointId(4));
        assert!(ids.corners.iter().all(|p| p.0 == 4));
    }
}
