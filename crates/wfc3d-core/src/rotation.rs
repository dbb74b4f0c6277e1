//! The 24 proper rotations of a cube.

use std::sync::OnceLock;

use crate::error::GeometryError;
use crate::matrix::{mul3, Mat3, IDENTITY3};

/// A proper rotation of the cube, named by its axis class.
///
/// - `AxisK*`: right-handed turns about a face axis.
/// - `EdgesK*`: half turns about an axis through the midpoints of two
///   opposite edges perpendicular to axis `K`.
/// - `Corner*`: thirds of a turn about a body diagonal, named by the corner
///   (`A` = min) the diagonal leaves through on the `-Z` end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Rotation3D {
    #[default]
    None = 0,
    AxisX90,
    AxisX180,
    AxisX270,
    AxisY90,
    AxisY180,
    AxisY270,
    AxisZ90,
    AxisZ180,
    AxisZ270,
    EdgesXa,
    EdgesXb,
    EdgesYa,
    EdgesYb,
    EdgesZa,
    EdgesZb,
    CornerAAA120,
    CornerAAA240,
    CornerABA120,
    CornerABA240,
    CornerBAA120,
    CornerBAA240,
    CornerBBA120,
    CornerBBA240,
}

use Rotation3D as R;

impl Rotation3D {
    /// Number of proper rotations.
    pub const COUNT: usize = 24;

    /// All rotations in discriminant order.
    pub const ALL: [Rotation3D; 24] = [
        R::None, R::AxisX90, R::AxisX180, R::AxisX270, R::AxisY90, R::AxisY180, R::AxisY270,
        R::AxisZ90, R::AxisZ180, R::AxisZ270, R::EdgesXa, R::EdgesXb, R::EdgesYa, R::EdgesYb,
        R::EdgesZa, R::EdgesZb, R::CornerAAA120, R::CornerAAA240, R::CornerABA120, R::CornerABA240,
        R::CornerBAA120, R::CornerBAA240, R::CornerBBA120, R::CornerBBA240,
    ];

    /// Dense index in `0..24`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a dense index.
    pub fn from_index(index: usize) -> Result<Self, GeometryError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidIndex {
                kind: "Rotation3D",
                index,
                count: Self::COUNT,
            })
    }

    pub(crate) fn matrix(self) -> Mat3 {
        static TABLE: OnceLock<[Mat3; 24]> = OnceLock::new();
        TABLE.get_or_init(|| Self::ALL.map(build))[self.index()]
    }

    pub(crate) fn from_matrix(m: &Mat3) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.matrix() == *m)
    }
}

fn build(r: Rotation3D) -> Mat3 {
    match r {
        R::None => IDENTITY3,
        R::AxisX90 => quarter_turn(0, 1),
        R::AxisX180 => quarter_turn(0, 2),
        R::AxisX270 => quarter_turn(0, 3),
        R::AxisY90 => quarter_turn(1, 1),
        R::AxisY180 => quarter_turn(1, 2),
        R::AxisY270 => quarter_turn(1, 3),
        R::AxisZ90 => quarter_turn(2, 1),
        R::AxisZ180 => quarter_turn(2, 2),
        R::AxisZ270 => quarter_turn(2, 3),
        R::EdgesXa => half_turn([0, 1, 1]),
        R::EdgesXb => half_turn([0, 1, -1]),
        R::EdgesYa => half_turn([1, 0, 1]),
        R::EdgesYb => half_turn([1, 0, -1]),
        R::EdgesZa => half_turn([1, 1, 0]),
        R::EdgesZb => half_turn([1, -1, 0]),
        R::CornerAAA120 => third_turn([1, 1, 1], 1),
        R::CornerAAA240 => third_turn([1, 1, 1], 2),
        R::CornerABA120 => third_turn([1, -1, 1], 1),
        R::CornerABA240 => third_turn([1, -1, 1], 2),
        R::CornerBAA120 => third_turn([-1, 1, 1], 1),
        R::CornerBAA240 => third_turn([-1, 1, 1], 2),
        R::CornerBBA120 => third_turn([-1, -1, 1], 1),
        R::CornerBBA240 => third_turn([-1, -1, 1], 2),
    }
}

fn power(m: Mat3, n: u32) -> Mat3 {
    (0..n).fold(IDENTITY3, |acc, _| mul3(&acc, &m))
}

// e_i -> e_j, e_j -> -e_i about axis k.
fn quarter_turn(k: usize, n: u32) -> Mat3 {
    let i = (k + 1) % 3;
    let j = (k + 2) % 3;
    let mut m = [[0i8; 3]; 3];
    m[k][k] = 1;
    m[j][i] = 1;
    m[i][j] = -1;
    power(m, n)
}

// m mᵀ - I, with |m|² = 2.
fn half_turn(axis: [i8; 3]) -> Mat3 {
    let mut m = [[0i8; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = axis[i] * axis[j] - i8::from(i == j);
        }
    }
    m
}

// Rodrigues at 120 degrees about s / sqrt(3): (-I + [s]x + s sᵀ) / 2.
fn third_turn(s: [i8; 3], n: u32) -> Mat3 {
    let cross: Mat3 = [
        [0, -s[2], s[1]],
        [s[2], 0, -s[0]],
        [-s[1], s[0], 0],
    ];
    let mut m = [[0i8; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (cross[i][j] + s[i] * s[j] - i8::from(i == j)) / 2;
        }
    }
    power(m, n)
}
