//! Concrete point ids of one face.

use wfc3d_core::{Direction, FacePoint, PointId, Transform2D, Transform3D};

/// The corner and edge ids of one face, indexed by [`FacePoint::index`]
/// in the frame of the face they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceIdentifiers {
    /// Corner ids.
    pub corners: [PointId; 4],
    /// Edge ids.
    pub edges: [PointId; 4],
}

impl FaceIdentifiers {
    /// The face given to tiles whose prototype is missing.
    pub const NULL: Self = Self {
        corners: [PointId(0); 4],
        edges: [PointId(0); 4],
    };

    /// Whether any point falls in the reserved null block.
    pub fn is_null(&self) -> bool {
        self.corners.iter().chain(&self.edges).any(|p| p.is_null())
    }

    /// Id of a corner.
    pub fn corner(&self, p: FacePoint) -> PointId {
        self.corners[p.index()]
    }

    /// Id of an edge.
    pub fn edge(&self, p: FacePoint) -> PointId {
        self.edges[p.index()]
    }

    /// Re-read these ids through a face orientation on face `dir`.
    ///
    /// Point `q` of the result carries the id found at
    /// `q.transform_face_corner(dir, t)` (or the edge analog) in `self`.
    pub fn oriented(&self, dir: Direction, t: Transform2D) -> Self {
        Self {
            corners: FacePoint::ALL.map(|q| self.corner(q.transform_face_corner(dir, t))),
            edges: FacePoint::ALL.map(|q| self.edge(q.transform_face_edge(dir, t))),
        }
    }

    /// World-frame ids of face `world_dir` for a tile placed with
    /// orientation `t`, given the tile's six local faces.
    pub fn world_face(local: &[FaceIdentifiers; 6], t: Transform3D, world_dir: Direction) -> Self {
        let back = t.inverse();
        let lookup_corner = |q: FacePoint| {
            let (d, p) = back.apply_face_corner(world_dir, q);
            local[d.index()].corner(p)
        };
        let lookup_edge = |q: FacePoint| {
            let (d, p) = back.apply_face_edge(world_dir, q);
            local[d.index()].edge(p)
        };
        Self {
            corners: FacePoint::ALL.map(lookup_corner),
            edges: FacePoint::ALL.map(lookup_edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wfc3d_core::Rotation3D;

    fn any_dir() -> impl Strategy<Value = Direction> {
        (0..Direction::COUNT).prop_map(|i| Direction::ALL[i])
    }

    fn any_t2() -> impl Strategy<Value = Transform2D> {
        (0..Transform2D::COUNT).prop_map(|i| Transform2D::ALL[i])
    }

    fn any_t3() -> impl Strategy<Value = Transform3D> {
        (0..Transform3D::COUNT).prop_map(|i| Transform3D::from_index(i).unwrap())
    }

    fn sample(base: u32) -> FaceIdentifiers {
        FaceIdentifiers {
            corners: [0, 1, 2, 3].map(|i| PointId(base + i)),
            edges: [0, 1, 2, 3].map(|i| PointId(base + i)),
        }
    }

    #[test]
    fn null_face_is_null() {
        assert!(FaceIdentifiers::NULL.is_null());
        assert!(!sample(4).is_null());
    }

    #[test]
    fn identity_orientation_is_noop() {
        for d in Direction::ALL {
            assert_eq!(sample(4).oriented(d, Transform2D::None), sample(4));
        }
    }

    #[test]
    fn world_face_under_identity_is_local() {
        let local = [4, 8, 12, 16, 20, 24].map(sample);
        for d in Direction::ALL {
            assert_eq!(
                FaceIdentifiers::world_face(&local, Transform3D::IDENTITY, d),
                local[d.index()]
            );
        }
    }

    #[test]
    fn world_face_follows_rotation() {
        let local = [4, 8, 12, 16, 20, 24].map(sample);
        let t = Transform3D::from(Rotation3D::AxisZ90);
        // +X rotates onto +Y, so the world +Y face carries the local +X ids.
        let world = FaceIdentifiers::world_face(&local, t, Direction::MaxY);
        let mut ids: Vec<u32> = world.corners.iter().map(|p| p.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![8, 9, 10, 11]);
    }

    proptest! {
        #[test]
        fn oriented_composes(base in 1u32..16, d in any_dir(), a in any_t2(), b in any_t2()) {
            let f = sample(base * 4);
            prop_assert_eq!(f.oriented(d, b).oriented(d, a), f.oriented(d, a.then(b)));
        }

        #[test]
        fn world_face_composes(a in any_t3(), b in any_t3(), d in any_dir()) {
            let local = [4, 8, 12, 16, 20, 24].map(sample);
            let once = Direction::ALL.map(|w| FaceIdentifiers::world_face(&local, a, w));
            prop_assert_eq!(
                FaceIdentifiers::world_face(&once, b, d),
                FaceIdentifiers::world_face(&local, a.then(b), d)
            );
        }
    }
}
