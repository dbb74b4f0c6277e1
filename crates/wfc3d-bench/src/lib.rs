//! Benchmark profiles for the wfc3d solver.
//!
//! - [`reference_catalog`]: a pipe network with rotated tiles, 3 tiles
//!   unwrapping to 49 options
//! - [`symmetric_catalog`]: `n` asymmetric tiles in all 48 orientations, for
//!   unwrap cost
//! - [`reference_config`]: a 16×16×4 grid with a generous unwinding budget
//! - [`stress_config`]: a 32×32×8 grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wfc3d_catalog::{FacePrototype, ImplicitTransformSet, Tile, TileCatalog, TileFace};
use wfc3d_core::{Direction, FacePrototypeId, TileId};
use wfc3d_engine::SolverConfig;

const PLAIN: FacePrototypeId = FacePrototypeId(1);
const PIPE: FacePrototypeId = FacePrototypeId(2);

fn piped(faces: &[Direction]) -> Tile {
    let mut tile = Tile::uniform(PLAIN).with_transforms(ImplicitTransformSet::all_rotations(false));
    for &dir in faces {
        *tile.face_mut(dir) = TileFace::new(PIPE);
    }
    tile
}

/// Empty space, straight pipes and elbows in every rotation.
pub fn reference_catalog() -> TileCatalog {
    let mut catalog = TileCatalog::new();
    for (id, name) in [(PLAIN, "plain"), (PIPE, "pipe")] {
        catalog
            .add_face_prototype(id, FacePrototype::uniform(name))
            .expect("benchmark prototype ids are non-null");
    }
    catalog.add_tile(TileId(0), Tile::uniform(PLAIN).with_weight(300));
    catalog.add_tile(TileId(1), piped(&[Direction::MinX, Direction::MaxX]));
    catalog.add_tile(
        TileId(2),
        piped(&[Direction::MinX, Direction::MinY]).with_weight(50),
    );
    catalog
}

/// `n` tiles whose faces all use distinct asymmetric prototypes, each
/// allowed in all 48 orientations.
pub fn symmetric_catalog(n: u32) -> TileCatalog {
    let mut catalog = TileCatalog::new();
    for i in 0..n {
        let proto = FacePrototypeId(i + 1);
        catalog
            .add_face_prototype(proto, FacePrototype::asymmetric(format!("face {i}")))
            .expect("benchmark prototype ids are non-null");
        catalog.add_tile(
            TileId(i),
            Tile::uniform(proto).with_transforms(ImplicitTransformSet::all_rotations(true)),
        );
    }
    catalog
}

/// 16×16×4 grid (1024 cells).
pub fn reference_config(seed: u64) -> SolverConfig {
    SolverConfig {
        dimensions: [16, 16, 4],
        seed,
        max_unwinding: 1_000,
        ..SolverConfig::default()
    }
}

/// 32×32×8 grid (8192 cells).
pub fn stress_config(seed: u64) -> SolverConfig {
    SolverConfig {
        dimensions: [32, 32, 8],
        seed,
        max_unwinding: 10_000,
        ..SolverConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert_eq!(reference_catalog().unwrap().unwrap().n_options(), 49);
        assert_eq!(symmetric_catalog(3).unwrap().unwrap().n_options(), 3 * 48);
        assert!(reference_config(1).validate().is_ok());
        assert!(stress_config(1).validate().is_ok());
    }
}
