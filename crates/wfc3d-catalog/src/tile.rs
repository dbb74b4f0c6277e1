//! Tile templates and their supported orientations.

use wfc3d_core::{Direction, FacePrototypeId, Rotation3D, Transform2D, Transform3D, TransformSet};

/// One face of a tile: which prototype it takes after, and how.
///
/// `orientation` maps this face's points onto the prototype's points: the
/// prototype id for local point `q` is found at
/// `q.transform_face_corner(dir, orientation)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileFace {
    /// The prototype this face takes after.
    pub prototype: FacePrototypeId,
    /// Orientation of this face relative to its prototype.
    pub orientation: Transform2D,
}

impl TileFace {
    /// A face using `prototype` with no reorientation.
    pub fn new(prototype: FacePrototypeId) -> Self {
        Self {
            prototype,
            orientation: Transform2D::None,
        }
    }

    /// Builder: set the orientation.
    pub fn oriented(mut self, orientation: Transform2D) -> Self {
        self.orientation = orientation;
        self
    }
}

/// A compact description of the orientations a tile may appear in.
///
/// The explicit set is every `initial.then(rotation)` for each initial
/// transform and each enabled rotation (identity is always enabled),
/// doubled by inversion when `allow_inversion` is set, plus `specific`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplicitTransformSet {
    /// Base orientations the rotation groups are applied to.
    pub initial: Vec<Transform3D>,
    /// Add the inverted copy of every generated orientation.
    pub allow_inversion: bool,
    /// Enable all 24 rotations.
    pub allow_all_rotations: bool,
    /// Enable quarter and half turns about every face axis.
    pub allow_axis_rotations: bool,
    /// Enable thirds of a turn about every body diagonal.
    pub allow_corner_rotations: bool,
    /// Enable half turns about every edge axis.
    pub allow_edge_rotations: bool,
    /// Enable turns about the X, Y, Z face axes individually.
    pub allow_axis_rotations_per_axis: [bool; 3],
    /// Enable edge half turns perpendicular to X, Y, Z individually.
    pub allow_edge_rotations_per_axis: [bool; 3],
    /// Extra orientations added verbatim.
    pub specific: Vec<Transform3D>,
}

impl Default for ImplicitTransformSet {
    fn default() -> Self {
        Self {
            initial: vec![Transform3D::IDENTITY],
            allow_inversion: false,
            allow_all_rotations: false,
            allow_axis_rotations: false,
            allow_corner_rotations: false,
            allow_edge_rotations: false,
            allow_axis_rotations_per_axis: [false; 3],
            allow_edge_rotations_per_axis: [false; 3],
            specific: Vec::new(),
        }
    }
}

impl ImplicitTransformSet {
    /// Only the identity orientation.
    pub fn identity_only() -> Self {
        Self::default()
    }

    /// All 24 rotations, optionally with their inversions.
    pub fn all_rotations(allow_inversion: bool) -> Self {
        Self {
            allow_all_rotations: true,
            allow_inversion,
            ..Self::default()
        }
    }

    fn allowed_rotations(&self) -> Vec<Rotation3D> {
        use Rotation3D as R;
        const AXIS: [[Rotation3D; 3]; 3] = [
            [R::AxisX90, R::AxisX180, R::AxisX270],
            [R::AxisY90, R::AxisY180, R::AxisY270],
            [R::AxisZ90, R::AxisZ180, R::AxisZ270],
        ];
        const EDGES: [[Rotation3D; 2]; 3] = [
            [R::EdgesXa, R::EdgesXb],
            [R::EdgesYa, R::EdgesYb],
            [R::EdgesZa, R::EdgesZb],
        ];
        const CORNERS: [Rotation3D; 8] = [
            R::CornerAAA120,
            R::CornerAAA240,
            R::CornerABA120,
            R::CornerABA240,
            R::CornerBAA120,
            R::CornerBAA240,
            R::CornerBBA120,
            R::CornerBBA240,
        ];

        if self.allow_all_rotations {
            return Rotation3D::ALL.to_vec();
        }
        let mut out = vec![R::None];
        for axis in 0..3 {
            if self.allow_axis_rotations || self.allow_axis_rotations_per_axis[axis] {
                out.extend(AXIS[axis]);
            }
            if self.allow_edge_rotations || self.allow_edge_rotations_per_axis[axis] {
                out.extend(EDGES[axis]);
            }
        }
        if self.allow_corner_rotations {
            out.extend(CORNERS);
        }
        out
    }

    /// Expand into an explicit set.
    pub fn explicit(&self) -> TransformSet {
        let invert = Transform3D::new(Rotation3D::None, true);
        let rotations = self.allowed_rotations();
        let mut set = TransformSet::empty();
        for &initial in &self.initial {
            for &r in &rotations {
                let t = initial.then(Transform3D::from(r));
                set.insert(t);
                if self.allow_inversion {
                    set.insert(t.then(invert));
                }
            }
        }
        set.extend(self.specific.iter().copied());
        set
    }
}

/// A weighted tile template with one face per direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Faces indexed by [`Direction::index`].
    pub faces: [TileFace; 6],
    /// Relative selection weight. Zero-weight tiles are only drawn when
    /// nothing heavier remains in a cell.
    pub weight: u32,
    /// Orientations described compactly.
    pub implicit_transforms: ImplicitTransformSet,
    /// Orientations listed one by one, added to the implicit set.
    pub precise_transforms: Vec<Transform3D>,
    /// Display name.
    pub nickname: String,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            faces: [TileFace::default(); 6],
            weight: 100,
            implicit_transforms: ImplicitTransformSet::default(),
            precise_transforms: Vec::new(),
            nickname: String::new(),
        }
    }
}

impl Tile {
    /// A tile with the given six faces and default weight and transforms.
    pub fn new(faces: [TileFace; 6]) -> Self {
        Self {
            faces,
            ..Self::default()
        }
    }

    /// A tile whose six faces all use `prototype` unoriented.
    pub fn uniform(prototype: FacePrototypeId) -> Self {
        Self::new([TileFace::new(prototype); 6])
    }

    /// Builder: set the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: set the nickname.
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Builder: set the implicit transform set.
    pub fn with_transforms(mut self, transforms: ImplicitTransformSet) -> Self {
        self.implicit_transforms = transforms;
        self
    }

    /// The face on side `dir`.
    pub fn face(&self, dir: Direction) -> &TileFace {
        &self.faces[dir.index()]
    }

    /// Mutable face on side `dir`.
    pub fn face_mut(&mut self, dir: Direction) -> &mut TileFace {
        &mut self.faces[dir.index()]
    }

    /// Every orientation this tile may appear in.
    pub fn supported_transforms(&self) -> TransformSet {
        let mut set = self.implicit_transforms.explicit();
        set.extend(self.precise_transforms.iter().copied());
        set
    }
}
