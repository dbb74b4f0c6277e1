//! The host-facing tile catalog.

use indexmap::IndexMap;
use wfc3d_core::{FacePrototypeId, TileId};

use crate::error::CatalogError;
use crate::prototype::FacePrototype;
use crate::tile::Tile;
use crate::unwrapped::UnwrappedCatalog;

/// Face prototypes and tiles, keyed by host-chosen ids.
///
/// Iteration order is insertion order, which fixes the [`PointId`] block
/// assigned to each prototype and the option order after unwrapping.
///
/// [`PointId`]: wfc3d_core::PointId
#[derive(Clone, Debug, Default)]
pub struct TileCatalog {
    face_prototypes: IndexMap<FacePrototypeId, FacePrototype>,
    tiles: IndexMap<TileId, Tile>,
}

impl TileCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype, returning the one it replaced.
    ///
    /// Replacing keeps the prototype's original position.
    pub fn add_face_prototype(
        &mut self,
        id: FacePrototypeId,
        prototype: FacePrototype,
    ) -> Result<Option<FacePrototype>, CatalogError> {
        if id.is_null() {
            return Err(CatalogError::ReservedFacePrototypeId);
        }
        Ok(self.face_prototypes.insert(id, prototype))
    }

    /// Register a tile, returning the one it replaced.
    pub fn add_tile(&mut self, id: TileId, tile: Tile) -> Option<Tile> {
        self.tiles.insert(id, tile)
    }

    /// Look up a prototype.
    pub fn face_prototype(&self, id: FacePrototypeId) -> Option<&FacePrototype> {
        self.face_prototypes.get(&id)
    }

    /// Look up a tile.
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Mutable tile access.
    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Id of the first prototype with the given nickname.
    pub fn face_prototype_by_nickname(&self, nickname: &str) -> Option<FacePrototypeId> {
        self.face_prototypes
            .iter()
            .find(|(_, p)| p.nickname == nickname)
            .map(|(id, _)| *id)
    }

    /// Id of the first tile with the given nickname.
    pub fn tile_by_nickname(&self, nickname: &str) -> Option<TileId> {
        self.tiles
            .iter()
            .find(|(_, t)| t.nickname == nickname)
            .map(|(id, _)| *id)
    }

    /// Prototypes in insertion order.
    pub fn face_prototypes(&self) -> impl Iterator<Item = (FacePrototypeId, &FacePrototype)> {
        self.face_prototypes.iter().map(|(id, p)| (*id, p))
    }

    /// Tiles in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().map(|(id, t)| (*id, t))
    }

    /// Number of tiles.
    pub fn n_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Resolve into the solver-ready form.
    ///
    /// # Errors
    ///
    /// [`CatalogError::EmptyCatalog`] with no tiles, and
    /// [`CatalogError::NoSupportedTransforms`] when no tile supports any
    /// orientation.
    pub fn unwrap(&self) -> Result<UnwrappedCatalog, CatalogError> {
        UnwrappedCatalog::build(self)
    }
}
