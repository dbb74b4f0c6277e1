//! Tile catalogs with known solution structure.
//!
//! - [`single_tile`]: one tile, one orientation. Every grid is solved
//!   before the first tick.
//! - [`two_colour`]: red and blue blocks. A connected grid is solved by
//!   painting it one colour.
//! - [`alternating`]: tiles that alternate along X. Rings of odd length
//!   along X have no solution.
//! - [`rotating`]: one tile with asymmetric faces in all 24 rotations.
//! - [`pipes`]: empty, straight and corner pipes in every rotation; solvable
//!   on any grid, with enough choice for non-trivial runs.

use wfc3d_catalog::{FacePrototype, ImplicitTransformSet, Tile, TileCatalog, TileFace};
use wfc3d_core::{Direction, FacePrototypeId, TileId};

pub const PLAIN: FacePrototypeId = FacePrototypeId(1);
pub const RED: FacePrototypeId = FacePrototypeId(1);
pub const BLUE: FacePrototypeId = FacePrototypeId(2);
pub const STRIPE_A: FacePrototypeId = FacePrototypeId(1);
pub const STRIPE_B: FacePrototypeId = FacePrototypeId(2);
pub const FILL: FacePrototypeId = FacePrototypeId(3);
pub const PIPE: FacePrototypeId = FacePrototypeId(2);
pub const ASYMMETRIC: FacePrototypeId = FacePrototypeId(1);

pub const BLOCK: TileId = TileId(1);
pub const RED_BLOCK: TileId = TileId(1);
pub const BLUE_BLOCK: TileId = TileId(2);
pub const AB: TileId = TileId(1);
pub const BA: TileId = TileId(2);
pub const EMPTY: TileId = TileId(1);
pub const STRAIGHT: TileId = TileId(2);
pub const CORNER: TileId = TileId(3);

fn with_faces(fill: FacePrototypeId, overrides: &[(Direction, FacePrototypeId)]) -> Tile {
    let mut tile = Tile::uniform(fill);
    for &(dir, proto) in overrides {
        *tile.face_mut(dir) = TileFace::new(proto);
    }
    tile
}

pub fn single_tile() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(PLAIN, FacePrototype::uniform("plain"))
        .expect("fixture ids are valid");
    cat.add_tile(BLOCK, Tile::uniform(PLAIN).with_nickname("block"));
    cat
}

pub fn two_colour() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(RED, FacePrototype::uniform("red"))
        .expect("fixture ids are valid");
    cat.add_face_prototype(BLUE, FacePrototype::uniform("blue"))
        .expect("fixture ids are valid");
    cat.add_tile(RED_BLOCK, Tile::uniform(RED).with_nickname("red"));
    cat.add_tile(BLUE_BLOCK, Tile::uniform(BLUE).with_nickname("blue"));
    cat
}

pub fn alternating() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(STRIPE_A, FacePrototype::uniform("a"))
        .expect("fixture ids are valid");
    cat.add_face_prototype(STRIPE_B, FacePrototype::uniform("b"))
        .expect("fixture ids are valid");
    cat.add_face_prototype(FILL, FacePrototype::uniform("fill"))
        .expect("fixture ids are valid");
    cat.add_tile(
        AB,
        with_faces(FILL, &[(Direction::MinX, STRIPE_A), (Direction::MaxX, STRIPE_B)]),
    );
    cat.add_tile(
        BA,
        with_faces(FILL, &[(Direction::MinX, STRIPE_B), (Direction::MaxX, STRIPE_A)]),
    );
    cat
}

pub fn rotating() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(ASYMMETRIC, FacePrototype::asymmetric("arrow"))
        .expect("fixture ids are valid");
    cat.add_tile(
        BLOCK,
        Tile::uniform(ASYMMETRIC).with_transforms(ImplicitTransformSet::all_rotations(false)),
    );
    cat
}

pub fn pipes() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(PLAIN, FacePrototype::uniform("plain"))
        .expect("fixture ids are valid");
    cat.add_face_prototype(PIPE, FacePrototype::uniform("pipe"))
        .expect("fixture ids are valid");
    let turns = ImplicitTransformSet::all_rotations(false);
    cat.add_tile(EMPTY, Tile::uniform(PLAIN).with_weight(300));
    cat.add_tile(
        STRAIGHT,
        with_faces(PLAIN, &[(Direction::MinX, PIPE), (Direction::MaxX, PIPE)])
            .with_transforms(turns.clone()),
    );
    cat.add_tile(
        CORNER,
        with_faces(PLAIN, &[(Direction::MinX, PIPE), (Direction::MinY, PIPE)])
            .with_weight(50)
            .with_transforms(turns),
    );
    cat
}
