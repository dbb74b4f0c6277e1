//! Named corners and edges of a cube face.

use crate::direction::Direction;
use crate::error::GeometryError;
use crate::matrix::apply2;
use crate::transform2d::Transform2D;

/// One of four named points on a face.
///
/// The same four names address both the corners and the edges of a face,
/// with different geometric meaning:
///
/// - **Corner**: first letter is the side along face axis 1, second letter
///   the side along face axis 2 (`A` = min, `B` = max).
/// - **Edge**: first letter is the axis the edge runs parallel to (`A` = axis
///   1, `B` = axis 2), second letter the side along the other axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FacePoint {
    /// Corner (min, min) / edge along axis 1 on the min side of axis 2.
    AA = 0,
    /// Corner (min, max) / edge along axis 1 on the max side of axis 2.
    AB = 1,
    /// Corner (max, min) / edge along axis 2 on the min side of axis 1.
    BA = 2,
    /// Corner (max, max) / edge along axis 2 on the max side of axis 1.
    BB = 3,
}

impl FacePoint {
    /// Number of points per face.
    pub const COUNT: usize = 4;

    /// All points in discriminant order.
    pub const ALL: [FacePoint; 4] = [FacePoint::AA, FacePoint::AB, FacePoint::BA, FacePoint::BB];

    /// Dense index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a dense index.
    pub fn from_index(index: usize) -> Result<Self, GeometryError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidIndex {
                kind: "FacePoint",
                index,
                count: Self::COUNT,
            })
    }

    /// Build a point from its two letters (`true` = `A`).
    pub fn from_sides(first_is_a: bool, second_is_a: bool) -> Self {
        match (first_is_a, second_is_a) {
            (true, true) => FacePoint::AA,
            (true, false) => FacePoint::AB,
            (false, true) => FacePoint::BA,
            (false, false) => FacePoint::BB,
        }
    }

    /// Whether the first letter is `A`.
    pub fn first_is_a(self) -> bool {
        matches!(self, FacePoint::AA | FacePoint::AB)
    }

    /// Whether the second letter is `A`.
    pub fn second_is_a(self) -> bool {
        matches!(self, FacePoint::AA | FacePoint::BA)
    }

    /// Face-local `(u, v)` of this point read as a corner.
    pub fn corner_coords(self) -> [i8; 2] {
        let side = |is_a: bool| if is_a { -1 } else { 1 };
        [side(self.first_is_a()), side(self.second_is_a())]
    }

    /// Inverse of [`FacePoint::corner_coords`].
    pub fn from_corner_coords(c: [i8; 2]) -> Self {
        Self::from_sides(c[0] < 0, c[1] < 0)
    }

    /// Face-local `(u, v)` of this point's midpoint read as an edge.
    pub fn edge_coords(self) -> [i8; 2] {
        match self {
            FacePoint::AA => [0, -1],
            FacePoint::AB => [0, 1],
            FacePoint::BA => [-1, 0],
            FacePoint::BB => [1, 0],
        }
    }

    /// Inverse of [`FacePoint::edge_coords`].
    pub fn from_edge_coords(c: [i8; 2]) -> Self {
        if c[0] == 0 {
            Self::from_sides(true, c[1] < 0)
        } else {
            Self::from_sides(false, c[0] < 0)
        }
    }

    /// Move this corner by the face transform `t` on face `dir`.
    ///
    /// For fixed `(dir, t)` this is a bijection, and
    /// `p.transform_face_corner(d, a).transform_face_corner(d, b)` equals
    /// `p.transform_face_corner(d, a.then(b))`.
    pub fn transform_face_corner(self, dir: Direction, t: Transform2D) -> Self {
        let m = t.for_face(dir).matrix();
        Self::from_corner_coords(apply2(&m, self.corner_coords()))
    }

    /// Edge analog of [`FacePoint::transform_face_corner`].
    pub fn transform_face_edge(self, dir: Direction, t: Transform2D) -> Self {
        let m = t.for_face(dir).matrix();
        Self::from_edge_coords(apply2(&m, self.edge_coords()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_point() -> impl Strategy<Value = FacePoint> {
        (0..FacePoint::COUNT).prop_map(|i| FacePoint::ALL[i])
    }

    fn any_dir() -> impl Strategy<Value = Direction> {
        (0..Direction::COUNT).prop_map(|i| Direction::ALL[i])
    }

    fn any_t2() -> impl Strategy<Value = Transform2D> {
        (0..Transform2D::COUNT).prop_map(|i| Transform2D::ALL[i])
    }

    #[test]
    fn coords_round_trip() {
        for p in FacePoint::ALL {
            assert_eq!(FacePoint::from_corner_coords(p.corner_coords()), p);
            assert_eq!(FacePoint::from_edge_coords(p.edge_coords()), p);
        }
    }

    #[test]
    fn quarter_turn_on_left_handed_face() {
        // MinX is left-handed, so the raw matrix applies: (u, v) -> (v, -u).
        let d = Direction::MinX;
        let t = Transform2D::Rotate90CW;
        assert_eq!(FacePoint::AA.transform_face_corner(d, t), FacePoint::AB);
        assert_eq!(FacePoint::AA.transform_face_edge(d, t), FacePoint::BA);
        assert_eq!(FacePoint::BA.transform_face_edge(d, t), FacePoint::AB);
    }

    #[test]
    fn edges_stay_edges_of_same_parallel_class_under_half_turn() {
        for d in Direction::ALL {
            for p in FacePoint::ALL {
                let q = p.transform_face_edge(d, Transform2D::Rotate180);
                assert_eq!(p.first_is_a(), q.first_is_a());
                assert_ne!(p, q);
            }
        }
    }

    proptest! {
        #[test]
        fn corner_round_trip(p in any_point(), d in any_dir(), t in any_t2()) {
            let q = p.transform_face_corner(d, t);
            prop_assert_eq!(q.transform_face_corner(d, t.inverse()), p);
        }

        #[test]
        fn edge_round_trip(p in any_point(), d in any_dir(), t in any_t2()) {
            let q = p.transform_face_edge(d, t);
            prop_assert_eq!(q.transform_face_edge(d, t.inverse()), p);
        }

        #[test]
        fn corner_composes(p in any_point(), d in any_dir(), a in any_t2(), b in any_t2()) {
            prop_assert_eq!(
                p.transform_face_corner(d, a).transform_face_corner(d, b),
                p.transform_face_corner(d, a.then(b))
            );
        }

        #[test]
        fn edge_composes(p in any_point(), d in any_dir(), a in any_t2(), b in any_t2()) {
            prop_assert_eq!(
                p.transform_face_edge(d, a).transform_face_edge(d, b),
                p.transform_face_edge(d, a.then(b))
            );
        }
    }
}
