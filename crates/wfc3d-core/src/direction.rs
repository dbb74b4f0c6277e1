//! The six axis-aligned faces of a cube cell.

use crate::error::GeometryError;

/// One of the six axis-aligned unit directions, i.e. one face of a cell.
///
/// The discriminant order (`MinX, MaxX, MinY, MaxY, MinZ, MaxZ`) is part of
/// the public contract: `index() / 2` is the axis and `index() % 2 == 0`
/// means the min side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `-X`
    MinX = 0,
    /// `+X`
    MaxX = 1,
    /// `-Y`
    MinY = 2,
    /// `+Y`
    MaxY = 3,
    /// `-Z`
    MinZ = 4,
    /// `+Z`
    MaxZ = 5,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 6;

    /// All directions in discriminant order.
    pub const ALL: [Direction; 6] = [
        Direction::MinX,
        Direction::MaxX,
        Direction::MinY,
        Direction::MaxY,
        Direction::MinZ,
        Direction::MaxZ,
    ];

    /// Dense index in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a dense index.
    pub fn from_index(index: usize) -> Result<Self, GeometryError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidIndex {
                kind: "Direction",
                index,
                count: Self::COUNT,
            })
    }

    /// The direction on the given axis (0 = X, 1 = Y, 2 = Z) and side.
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    pub fn from_axis(axis: usize, is_min: bool) -> Self {
        Self::ALL[axis * 2 + usize::from(!is_min)]
    }

    /// Axis index: 0 = X, 1 = Y, 2 = Z.
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    /// Whether this is the min (negative) side of its axis.
    pub fn is_min(self) -> bool {
        self.index() % 2 == 0
    }

    /// `-1` for min faces, `+1` for max faces.
    pub fn sign(self) -> i8 {
        if self.is_min() {
            -1
        } else {
            1
        }
    }

    /// The face on the other side of the cell.
    pub fn opposite(self) -> Self {
        Self::ALL[self.index() ^ 1]
    }

    /// Unit vector pointing out of this face.
    pub fn vector(self) -> [i8; 3] {
        let mut v = [0i8; 3];
        v[self.axis()] = self.sign();
        v
    }

    /// The direction of an axis-aligned vector, taken from its dominant
    /// component. Used to map face normals through orientation matrices.
    pub fn from_vector(v: [i8; 3]) -> Self {
        let axis = (0..3)
            .max_by_key(|&i| v[i].unsigned_abs())
            .unwrap_or(0);
        Self::from_axis(axis, v[axis] < 0)
    }

    /// The two in-plane axes of this face, always ordered X -> Y -> Z.
    ///
    /// On an X face the axes are (Y, Z), on a Y face (X, Z), on a Z face (X, Y).
    pub fn face_axes(self) -> (usize, usize) {
        match self.axis() {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        }
    }

    /// Whether `axis1 x axis2` points out of this face.
    ///
    /// True for `MaxX`, `MinY` and `MaxZ`. Face-local 2D orientations are
    /// mirrored on these faces so that a rotation reads the same way when
    /// the face is viewed from outside the cell.
    pub fn is_right_handed(self) -> bool {
        // Y x Z = +X, X x Z = -Y, X x Y = +Z
        let frame_sign: i8 = if self.axis() == 1 { -1 } else { 1 };
        frame_sign == self.sign()
    }
}
