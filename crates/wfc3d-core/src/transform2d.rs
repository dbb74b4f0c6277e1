//! The dihedral group of the square: orientations of a single face.

use crate::direction::Direction;
use crate::error::GeometryError;
use crate::matrix::{mul2, Mat2};

/// One of the eight symmetries of a square face.
///
/// Acts on face-local coordinates `(u, v)` where `u` runs along the face's
/// first in-plane axis and `v` along the second (see
/// [`Direction::face_axes`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Transform2D {
    /// Identity.
    #[default]
    None = 0,
    /// Quarter turn clockwise.
    Rotate90CW = 1,
    /// Half turn.
    Rotate180 = 2,
    /// Quarter turn counter-clockwise.
    Rotate270CW = 3,
    /// Mirror across the `v` axis (`u` negated).
    FlipX = 4,
    /// Mirror across the `u` axis (`v` negated).
    FlipY = 5,
    /// Mirror across the `u = v` diagonal.
    FlipDiag1 = 6,
    /// Mirror across the `u = -v` diagonal.
    FlipDiag2 = 7,
}

impl Transform2D {
    /// Number of elements in the group.
    pub const COUNT: usize = 8;

    /// All elements in discriminant order.
    pub const ALL: [Transform2D; 8] = [
        Transform2D::None,
        Transform2D::Rotate90CW,
        Transform2D::Rotate180,
        Transform2D::Rotate270CW,
        Transform2D::FlipX,
        Transform2D::FlipY,
        Transform2D::FlipDiag1,
        Transform2D::FlipDiag2,
    ];

    /// Dense index in `0..8`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a dense index.
    pub fn from_index(index: usize) -> Result<Self, GeometryError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidIndex {
                kind: "Transform2D",
                index,
                count: Self::COUNT,
            })
    }

    pub(crate) fn matrix(self) -> Mat2 {
        match self {
            Transform2D::None => [[1, 0], [0, 1]],
            Transform2D::Rotate90CW => [[0, 1], [-1, 0]],
            Transform2D::Rotate180 => [[-1, 0], [0, -1]],
            Transform2D::Rotate270CW => [[0, -1], [1, 0]],
            Transform2D::FlipX => [[-1, 0], [0, 1]],
            Transform2D::FlipY => [[1, 0], [0, -1]],
            Transform2D::FlipDiag1 => [[0, 1], [1, 0]],
            Transform2D::FlipDiag2 => [[0, -1], [-1, 0]],
        }
    }

    fn from_matrix(m: &Mat2) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.matrix() == *m)
            .expect("dihedral group is closed under composition")
    }

    /// Whether this is a reflection (determinant -1).
    pub fn is_reflection(self) -> bool {
        self.index() >= 4
    }

    /// Apply `self` first, then `next`.
    pub fn then(self, next: Transform2D) -> Transform2D {
        Self::from_matrix(&mul2(&next.matrix(), &self.matrix()))
    }

    /// The transform undoing `self`.
    pub fn inverse(self) -> Transform2D {
        match self {
            Transform2D::Rotate90CW => Transform2D::Rotate270CW,
            Transform2D::Rotate270CW => Transform2D::Rotate90CW,
            other => other,
        }
    }

    /// The transform as it acts on the face-local axes of `dir`.
    ///
    /// Right-handed faces are viewed from outside the cell with their frame
    /// mirrored, so the transform is conjugated by [`Transform2D::FlipX`].
    /// Conjugation is a group automorphism: `a.then(b).for_face(d)` equals
    /// `a.for_face(d).then(b.for_face(d))`.
    pub fn for_face(self, dir: Direction) -> Transform2D {
        if dir.is_right_handed() {
            Transform2D::FlipX.then(self).then(Transform2D::FlipX)
        } else {
            self
        }
    }
}
