//! The solver-ready form of a [`TileCatalog`].

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};
use wfc3d_core::{Direction, FacePrototypeId, PointId, TileId, Transform2D, Transform3D};

use crate::catalog::TileCatalog;
use crate::error::CatalogError;
use crate::face::FaceIdentifiers;
use crate::prototype::FacePrototype;

/// Dense index of a distinct world-frame face across all options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey(pub u32);

impl FaceKey {
    /// The key as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One legal `(tile, orientation)` pair, with its world-frame faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileOption {
    /// Dense index of the tile within the unwrapped catalog.
    pub tile_index: usize,
    /// Orientation the tile is placed in.
    pub transform: Transform3D,
    faces: [FaceKey; 6],
}

impl TileOption {
    /// Key of the world-frame face on side `dir`.
    pub fn face(&self, dir: Direction) -> FaceKey {
        self.faces[dir.index()]
    }
}

/// Immutable catalog with resolved point ids and an enumerated option list.
///
/// Tiles are re-indexed densely in catalog order; tiles that support no
/// orientation are dropped. Options are ordered by tile, then by ascending
/// transform index.
#[derive(Clone, Debug)]
pub struct UnwrappedCatalog {
    tile_ids: Vec<TileId>,
    tile_indices: IndexMap<TileId, usize>,
    tile_weights: Vec<u32>,
    local_faces: Vec<[FaceIdentifiers; 6]>,
    prototypes: IndexMap<FacePrototypeId, (PointId, FacePrototype)>,
    options: Vec<TileOption>,
    option_indices: IndexMap<(usize, Transform3D), usize>,
    face_keys: IndexSet<FaceIdentifiers>,
    null_faces_match: bool,
}

impl UnwrappedCatalog {
    pub(crate) fn build(catalog: &TileCatalog) -> Result<Self, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let prototypes: IndexMap<_, _> = catalog
            .face_prototypes()
            .enumerate()
            .map(|(i, (id, proto))| {
                let first = PointId(PointId::NULL_BLOCK_LEN + PointId::BLOCK_LEN * i as u32);
                (id, (first, proto.clone()))
            })
            .collect();

        let mut out = Self {
            tile_ids: Vec::new(),
            tile_indices: IndexMap::new(),
            tile_weights: Vec::new(),
            local_faces: Vec::new(),
            prototypes,
            options: Vec::new(),
            option_indices: IndexMap::new(),
            face_keys: IndexSet::new(),
            null_faces_match: false,
        };

        for (tile_id, tile) in catalog.tiles() {
            let supported = tile.supported_transforms();
            if supported.is_empty() {
                warn!(tile = %tile_id, "tile supports no orientation and will never be placed");
                continue;
            }

            let local = Direction::ALL.map(|dir| {
                let face = tile.face(dir);
                out.face_identifiers_for(face.prototype, dir, face.orientation)
                    .unwrap_or_else(|| {
                        warn!(
                            tile = %tile_id,
                            ?dir,
                            prototype = %face.prototype,
                            "tile face references a missing prototype; using the null face"
                        );
                        FaceIdentifiers::NULL
                    })
            });

            let tile_index = out.tile_ids.len();
            out.tile_ids.push(tile_id);
            out.tile_indices.insert(tile_id, tile_index);
            out.tile_weights.push(tile.weight);
            out.local_faces.push(local);

            for transform in supported.iter() {
                let faces = Direction::ALL.map(|dir| {
                    let world = FaceIdentifiers::world_face(&local, transform, dir);
                    let (key, _) = out.face_keys.insert_full(world);
                    FaceKey(key as u32)
                });
                out.option_indices
                    .insert((tile_index, transform), out.options.len());
                out.options.push(TileOption {
                    tile_index,
                    transform,
                    faces,
                });
            }
        }

        if out.options.is_empty() {
            return Err(CatalogError::NoSupportedTransforms);
        }

        debug!(
            tiles = out.tile_ids.len(),
            options = out.options.len(),
            face_keys = out.face_keys.len(),
            "unwrapped tile catalog"
        );
        Ok(out)
    }

    // ── Tiles ───────────────────────────────────────────────────

    /// Number of tiles that survived unwrapping.
    pub fn n_tiles(&self) -> usize {
        self.tile_ids.len()
    }

    /// Dense index of a host tile id.
    pub fn tile_index_of(&self, id: TileId) -> Option<usize> {
        self.tile_indices.get(&id).copied()
    }

    /// Host tile id at a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_tiles()`.
    pub fn tile_id(&self, index: usize) -> TileId {
        self.tile_ids[index]
    }

    /// Selection weight of the tile at a dense index.
    pub fn tile_weight(&self, index: usize) -> u32 {
        self.tile_weights[index]
    }

    /// A tile's six faces in its own frame.
    pub fn local_faces(&self, index: usize) -> &[FaceIdentifiers; 6] {
        &self.local_faces[index]
    }

    // ── Options ─────────────────────────────────────────────────

    /// Every option, in unwrap order.
    pub fn options(&self) -> &[TileOption] {
        &self.options
    }

    /// Number of options.
    pub fn n_options(&self) -> usize {
        self.options.len()
    }

    /// Index of the option placing tile `tile_index` with `transform`, if
    /// the tile supports that orientation.
    pub fn option_index(&self, tile_index: usize, transform: Transform3D) -> Option<usize> {
        self.option_indices.get(&(tile_index, transform)).copied()
    }

    /// Selection weight of an option (its tile's weight).
    pub fn option_weight(&self, option: usize) -> u32 {
        self.tile_weights[self.options[option].tile_index]
    }

    // ── Faces ───────────────────────────────────────────────────

    /// First [`PointId`] of a prototype's block.
    pub fn prototype_first_id(&self, id: FacePrototypeId) -> Option<PointId> {
        self.prototypes.get(&id).map(|(first, _)| *first)
    }

    /// Ids a face of prototype `id` carries on side `dir` when placed with
    /// orientation `orientation`, or `None` for an unknown prototype.
    pub fn face_identifiers_for(
        &self,
        id: FacePrototypeId,
        dir: Direction,
        orientation: Transform2D,
    ) -> Option<FaceIdentifiers> {
        let (first, proto) = self.prototypes.get(&id)?;
        Some(proto.unwrap(*first).oriented(dir, orientation))
    }

    /// Number of distinct world-frame faces.
    pub fn n_face_keys(&self) -> usize {
        self.face_keys.len()
    }

    /// Key of a face, if any option has it.
    pub fn face_key(&self, face: &FaceIdentifiers) -> Option<FaceKey> {
        self.face_keys.get_index_of(face).map(|i| FaceKey(i as u32))
    }

    /// The ids behind a key.
    ///
    /// # Panics
    ///
    /// Panics if `key` did not come from this catalog.
    pub fn face_identifiers(&self, key: FaceKey) -> &FaceIdentifiers {
        &self.face_keys[key.index()]
    }

    /// Whether two touching faces are compatible.
    ///
    /// Faces match when their ids agree point for point. Null faces match
    /// each other only when null matching is enabled.
    pub fn faces_match(&self, a: FaceKey, b: FaceKey) -> bool {
        a == b && (self.null_faces_match || !self.face_identifiers(a).is_null())
    }

    /// Whether two null faces count as compatible.
    pub fn null_faces_match(&self) -> bool {
        self.null_faces_match
    }

    /// Set the null-face matching policy.
    pub fn set_null_faces_match(&mut self, enabled: bool) {
        self.null_faces_match = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::FacePrototype;
    use crate::tile::{ImplicitTransformSet, Tile, TileFace};
    use wfc3d_core::Rotation3D;

    fn two_prototype_catalog() -> TileCatalog {
        let mut cat = TileCatalog::new();
        cat.add_face_prototype(FacePrototypeId(1), FacePrototype::uniform("a"))
            .unwrap();
        cat.add_face_prototype(FacePrototypeId(2), FacePrototype::asymmetric("b"))
            .unwrap();
        let mut t = Tile::uniform(FacePrototypeId(1));
        t.face_mut(Direction::MaxX).prototype = FacePrototypeId(2);
        cat.add_tile(TileId(7), t.with_transforms(ImplicitTransformSet::all_rotations(false)));
        cat.add_tile(TileId(3), Tile::uniform(FacePrototypeId(1)));
        cat
    }

    #[test]
    fn blocks_follow_catalog_order() {
        let un = two_prototype_catalog().unwrap().unwrap();
        assert_eq!(un.prototype_first_id(FacePrototypeId(1)), Some(PointId(4)));
        assert_eq!(un.prototype_first_id(FacePrototypeId(2)), Some(PointId(8)));
        assert_eq!(un.prototype_first_id(FacePrototypeId(9)), None);
    }

    #[test]
    fn options_enumerate_supported_transforms_in_order() {
        let un = two_prototype_catalog().unwrap().unwrap();
        assert_eq!(un.n_tiles(), 2);
        assert_eq!(un.n_options(), 24 + 1);
        assert_eq!(un.tile_id(0), TileId(7));
        assert_eq!(un.tile_index_of(TileId(3)), Some(1));
        let transforms: Vec<_> = un.options()[..24].iter().map(|o| o.transform.index()).collect();
        assert_eq!(transforms, (0..24).collect::<Vec<_>>());
        assert_eq!(un.option_index(1, Transform3D::IDENTITY), Some(24));
        assert_eq!(
            un.option_index(1, Transform3D::from(Rotation3D::AxisX90)),
            None
        );
    }

    #[test]
    fn unwrap_is_deterministic() {
        let cat = two_prototype_catalog();
        let a = cat.unwrap().unwrap();
        let b = cat.unwrap().unwrap();
        assert_eq!(a.options(), b.options());
        assert_eq!(a.n_face_keys(), b.n_face_keys());
        for k in 0..a.n_face_keys() {
            let key = FaceKey(k as u32);
            assert_eq!(a.face_identifiers(key), b.face_identifiers(key));
        }
    }

    #[test]
    fn missing_prototype_falls_back_to_null_face() {
        let mut cat = TileCatalog::new();
        cat.add_tile(TileId(1), Tile::uniform(FacePrototypeId(42)));
        let mut un = cat.unwrap().unwrap();
        let key = un.options()[0].face(Direction::MaxX);
        assert!(un.face_identifiers(key).is_null());
        assert!(!un.faces_match(key, key));
        un.set_null_faces_match(true);
        assert!(un.faces_match(key, key));
    }

    #[test]
    fn tile_without_transforms_is_dropped() {
        let mut cat = two_prototype_catalog();
        let none = ImplicitTransformSet {
            initial: Vec::new(),
            ..ImplicitTransformSet::default()
        };
        cat.add_tile(TileId(99), Tile::uniform(FacePrototypeId(1)).with_transforms(none.clone()));
        let un = cat.unwrap().unwrap();
        assert_eq!(un.tile_index_of(TileId(99)), None);

        let mut only_empty = TileCatalog::new();
        only_empty.add_tile(TileId(1), Tile::uniform(FacePrototypeId(1)).with_transforms(none));
        match only_empty.unwrap() {
            Err(CatalogError::NoSupportedTransforms) => {}
            other => panic!("expected NoSupportedTransforms, got {other:?}"),
        }
    }

    #[test]
    fn rotated_option_moves_odd_face() {
        let un = two_prototype_catalog().unwrap().unwrap();
        let odd_face = un
            .face_identifiers_for(FacePrototypeId(2), Direction::MaxX, Transform2D::None)
            .unwrap();
        let odd = un.face_key(&odd_face);
        assert!(odd.is_some());
        let rot = un
            .option_index(0, Transform3D::from(Rotation3D::AxisZ90))
            .unwrap();
        let opt = un.options()[rot];
        // +X goes to +Y under a quarter turn about Z.
        assert!(un.face_identifiers(opt.face(Direction::MaxY)).corners[0].0 >= 8);
        assert_ne!(Some(opt.face(Direction::MaxX)), odd);
    }

    #[test]
    fn oriented_face_differs_from_unoriented_for_asymmetric_prototype() {
        let un = two_prototype_catalog().unwrap().unwrap();
        let plain = un
            .face_identifiers_for(FacePrototypeId(2), Direction::MinZ, Transform2D::None)
            .unwrap();
        let turned = un
            .face_identifiers_for(FacePrototypeId(2), Direction::MinZ, Transform2D::Rotate90CW)
            .unwrap();
        assert_ne!(plain, turned);
        assert_eq!(
            un.face_identifiers_for(FacePrototypeId(1), Direction::MinZ, Transform2D::Rotate90CW),
            un.face_identifiers_for(FacePrototypeId(1), Direction::MinZ, Transform2D::None)
        );
    }
}
