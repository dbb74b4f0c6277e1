//! The full 48-element orientation group of the cube.

use std::fmt;

use crate::direction::Direction;
use crate::error::GeometryError;
use crate::face_point::FacePoint;
use crate::matrix::{apply3, det3, mul3, neg3, Mat3};
use crate::rotation::Rotation3D;

/// An orientation: a proper rotation optionally followed by inversion
/// through the cell centre.
///
/// Dense index is `rotation + 24 * invert`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transform3D {
    /// The proper-rotation part.
    pub rotation: Rotation3D,
    /// Whether the point reflection `x -> -x` is applied.
    pub invert: bool,
}

impl Transform3D {
    /// Number of elements in the group.
    pub const COUNT: usize = 48;

    /// The identity orientation.
    pub const IDENTITY: Transform3D = Transform3D {
        rotation: Rotation3D::None,
        invert: false,
    };

    /// Construct from parts.
    pub fn new(rotation: Rotation3D, invert: bool) -> Self {
        Self { rotation, invert }
    }

    /// Dense index in `0..48`.
    pub fn index(self) -> usize {
        self.rotation.index() + Rotation3D::COUNT * usize::from(self.invert)
    }

    /// Decode a dense index.
    pub fn from_index(index: usize) -> Result<Self, GeometryError> {
        if index >= Self::COUNT {
            return Err(GeometryError::InvalidIndex {
                kind: "Transform3D",
                index,
                count: Self::COUNT,
            });
        }
        Ok(Self {
            rotation: Rotation3D::ALL[index % Rotation3D::COUNT],
            invert: index >= Rotation3D::COUNT,
        })
    }

    /// Iterate every orientation in index order.
    pub fn all() -> impl Iterator<Item = Transform3D> {
        (0..Self::COUNT).filter_map(|i| Self::from_index(i).ok())
    }

    fn matrix(self) -> Mat3 {
        let r = self.rotation.matrix();
        if self.invert {
            neg3(&r)
        } else {
            r
        }
    }

    fn from_matrix(m: &Mat3) -> Self {
        let invert = det3(m) < 0;
        let proper = if invert { neg3(m) } else { *m };
        let rotation =
            Rotation3D::from_matrix(&proper).expect("orientation group is closed under composition");
        Self { rotation, invert }
    }

    /// Apply `self` first, then `next`.
    pub fn then(self, next: Transform3D) -> Transform3D {
        Self::from_matrix(&mul3(&next.matrix(), &self.matrix()))
    }

    /// The orientation undoing `self`.
    pub fn inverse(self) -> Transform3D {
        let m = self.matrix();
        let mut t = [[0i8; 3]; 3];
        for (i, row) in t.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[j][i];
            }
        }
        Self::from_matrix(&t)
    }

    /// Where the face `dir` ends up.
    pub fn apply_direction(self, dir: Direction) -> Direction {
        Direction::from_vector(apply3(&self.matrix(), dir.vector()))
    }

    /// Where the corner `p` of face `dir` ends up.
    pub fn apply_face_corner(self, dir: Direction, p: FacePoint) -> (Direction, FacePoint) {
        let (d, uv) = self.apply_face_coords(dir, p.corner_coords());
        (d, FacePoint::from_corner_coords(uv))
    }

    /// Where the edge `p` of face `dir` ends up.
    pub fn apply_face_edge(self, dir: Direction, p: FacePoint) -> (Direction, FacePoint) {
        let (d, uv) = self.apply_face_coords(dir, p.edge_coords());
        (d, FacePoint::from_edge_coords(uv))
    }

    fn apply_face_coords(self, dir: Direction, uv: [i8; 2]) -> (Direction, [i8; 2]) {
        let (a1, a2) = dir.face_axes();
        let mut pos = dir.vector();
        pos[a1] = uv[0];
        pos[a2] = uv[1];
        let moved = apply3(&self.matrix(), pos);
        let new_dir = self.apply_direction(dir);
        let (b1, b2) = new_dir.face_axes();
        (new_dir, [moved[b1], moved[b2]])
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invert {
            write!(f, "{:?}+Invert", self.rotation)
        } else {
            write!(f, "{:?}", self.rotation)
        }
    }
}

impl From<Rotation3D> for Transform3D {
    fn from(rotation: Rotation3D) -> Self {
        Self {
            rotation,
            invert: false,
        }
    }
}

// ── TransformSet ────────────────────────────────────────────────

/// A set of orientations, stored as a 48-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransformSet {
    bits: u64,
}

impl TransformSet {
    const MASK: u64 = (1u64 << Transform3D::COUNT) - 1;
    const ROTATIONS: u64 = (1u64 << Rotation3D::COUNT) - 1;

    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All 48 orientations.
    pub fn full() -> Self {
        Self { bits: Self::MASK }
    }

    /// All 24 proper rotations, no inversions.
    pub fn rotations() -> Self {
        Self {
            bits: Self::ROTATIONS,
        }
    }

    /// The set containing only `t`.
    pub fn single(t: Transform3D) -> Self {
        Self {
            bits: 1u64 << t.index(),
        }
    }

    /// Add `t`. Returns `true` if it was not already present.
    pub fn insert(&mut self, t: Transform3D) -> bool {
        let bit = 1u64 << t.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Remove `t`. Returns `true` if it was present.
    pub fn remove(&mut self, t: Transform3D) -> bool {
        let bit = 1u64 << t.index();
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Membership test.
    pub fn contains(&self, t: Transform3D) -> bool {
        self.bits & (1u64 << t.index()) != 0
    }

    /// Number of orientations in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Set union.
    pub fn union(&self, other: &TransformSet) -> TransformSet {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Set intersection.
    pub fn intersection(&self, other: &TransformSet) -> TransformSet {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Members in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Transform3D> + '_ {
        Transform3D::all().filter(|t| self.contains(*t))
    }
}

impl FromIterator<Transform3D> for TransformSet {
    fn from_iter<I: IntoIterator<Item = Transform3D>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Transform3D> for TransformSet {
    fn extend<I: IntoIterator<Item = Transform3D>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}
