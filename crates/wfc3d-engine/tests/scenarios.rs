//! Integration test: end-to-end scenarios through the `Generator` facade.

use wfc3d_catalog::{FacePrototype, Tile, TileCatalog};
use wfc3d_core::{Direction, FacePrototypeId, TileId, Transform2D, Transform3D};
use wfc3d_engine::{Generator, GeneratorStatus, SolverConfig, SolverError, StandardRunner};
use wfc3d_test_utils::fixtures;

fn config(dims: [u32; 3]) -> SolverConfig {
    SolverConfig {
        dimensions: dims,
        ..SolverConfig::default()
    }
}

// ── Trivial grid ─────────────────────────────────────────────────

#[test]
fn single_cell_single_tile_solves_in_one_call() {
    let mut g = Generator::new();
    g.start(&fixtures::single_tile(), config([1, 1, 1])).unwrap();
    assert!(g.run_to_end(1));
    assert_eq!(g.status(), GeneratorStatus::Finished);

    let cell = g.cell([0, 0, 0]);
    assert!(cell.is_set);
    assert_eq!(cell.if_set.tile_id, fixtures::BLOCK);
    assert_eq!(cell.if_set.transform, Transform3D::IDENTITY);
    assert_eq!(g.progress(), 1.0);
}

// ── Contradictions without budget ────────────────────────────────

/// Two cells whose touching faces reference a prototype that does not
/// exist, so they carry null ids and never match.
fn dangling_catalog() -> TileCatalog {
    let mut cat = TileCatalog::new();
    cat.add_face_prototype(FacePrototypeId(1), FacePrototype::uniform("solid"))
        .unwrap();
    let mut tile = Tile::uniform(FacePrototypeId(1));
    tile.face_mut(Direction::MinX).prototype = FacePrototypeId(77);
    tile.face_mut(Direction::MaxX).prototype = FacePrototypeId(77);
    cat.add_tile(TileId(3), tile);
    cat
}

#[test]
fn unmatched_faces_fail_without_budget() {
    let mut g = Generator::new();
    g.start(&dangling_catalog(), config([2, 1, 1])).unwrap();
    assert!(!g.run_to_end(100));
    assert_eq!(g.status(), GeneratorStatus::Failed);
    assert!(g.progress() < 1.0);
    assert_eq!(g.tick(), Err(SolverError::NotRunning));
}

#[test]
fn null_faces_can_be_allowed_to_match() {
    let mut g = Generator::new();
    let cfg = SolverConfig {
        null_faces_match: true,
        ..config([2, 1, 1])
    };
    g.start(&dangling_catalog(), cfg).unwrap();
    assert!(g.run_to_end(10));
    assert_eq!(g.progress(), 1.0);
}

#[test]
fn first_contradiction_is_fatal_with_zero_unwinding() {
    // An odd ring of alternating tiles has no solution, but every single
    // pair of neighbours does, so the failure only shows after a commit.
    let cfg = SolverConfig {
        dimensions: [3, 1, 1],
        periodic: [true, false, false],
        max_unwinding: 0,
        ..SolverConfig::default()
    };
    let mut runner = StandardRunner::new(&fixtures::alternating(), cfg).unwrap();
    assert!(runner.pending_contradiction().is_none());

    runner.tick();
    assert!(runner.is_failed());
    assert_eq!(runner.timestamp(), 1);
    assert_eq!(runner.metrics().contradictions, 1);
    assert_eq!(runner.metrics().recoveries, 0);
    assert!(!runner.tick_n(50));
    assert_eq!(runner.timestamp(), 1);
}

#[test]
fn budget_bounds_an_unsolvable_run() {
    let cfg = SolverConfig {
        dimensions: [3, 1, 1],
        periodic: [true, false, false],
        max_unwinding: 5,
        ..SolverConfig::default()
    };
    let mut g = Generator::new();
    g.start(&fixtures::alternating(), cfg).unwrap();
    assert!(!g.run_to_end(1_000));
    assert_eq!(g.status(), GeneratorStatus::Failed);

    let metrics = g.metrics().unwrap();
    assert_eq!(metrics.recoveries, 5);
    assert_eq!(g.runner().unwrap().unwinding_count(), 5);
    assert!(g.temperature_stats().max > 0.0);
}

// ── Periodic wrap ────────────────────────────────────────────────

#[test]
fn periodic_axis_links_opposite_boundaries() {
    let open = config([3, 1, 1]);
    let mut runner = StandardRunner::new(&fixtures::alternating(), open).unwrap();
    runner
        .set_cell([0, 0, 0], fixtures::AB, Transform3D::IDENTITY, false)
        .unwrap();
    assert!(runner.pending_contradiction().is_none());
    assert_eq!(runner.chosen(2).map(|c| c.0), Some(fixtures::AB));

    let ring = SolverConfig {
        periodic: [true, false, false],
        ..config([3, 1, 1])
    };
    let mut runner = StandardRunner::new(&fixtures::alternating(), ring).unwrap();
    runner
        .set_cell([0, 0, 0], fixtures::AB, Transform3D::IDENTITY, false)
        .unwrap();
    assert!(runner.pending_contradiction().is_some());
}

#[test]
fn periodic_coordinates_wrap_on_input() {
    let ring = SolverConfig {
        periodic: [true, false, false],
        ..config([4, 1, 1])
    };
    let mut runner = StandardRunner::new(&fixtures::alternating(), ring).unwrap();
    runner
        .set_cell([-1, 0, 0], fixtures::BA, Transform3D::IDENTITY, false)
        .unwrap();
    assert_eq!(runner.chosen(3).map(|c| c.0), Some(fixtures::BA));
    assert_eq!(runner.chosen(0).map(|c| c.0), Some(fixtures::AB));
    assert!(runner.is_finished());
}

// ── Face constraints ─────────────────────────────────────────────

#[test]
fn face_constraint_pins_the_solved_face() {
    let mut g = Generator::new();
    g.start(&fixtures::pipes(), config([3, 1, 1])).unwrap();
    g.set_face_constraint([1, 0, 0], Direction::MaxX, fixtures::PIPE, Transform2D::None)
        .unwrap();
    assert!(g.run_to_end(100));

    let runner = g.runner().unwrap();
    let catalog = runner.catalog();
    let wanted = catalog
        .face_identifiers_for(fixtures::PIPE, Direction::MaxX, Transform2D::None)
        .unwrap();
    let index = runner.grid().shape().index_of([1, 0, 0]).unwrap();
    let option = runner.grid().cell(index).chosen().unwrap();
    let key = catalog.options()[option].face(Direction::MaxX);
    assert_eq!(catalog.face_identifiers(key), &wanted);

    // The neighbour must continue the pipe.
    let right = runner.grid().cell(index + 1).chosen().unwrap();
    assert_eq!(catalog.options()[right].face(Direction::MinX), key);
}

#[test]
fn face_constraint_respects_orientation() {
    let mut runner = StandardRunner::new(&fixtures::rotating(), config([1, 1, 1])).unwrap();
    assert_eq!(runner.grid().cell(0).n_possibilities(), 24);
    runner
        .set_face_constraint(
            [0, 0, 0],
            Direction::MaxZ,
            fixtures::ASYMMETRIC,
            Transform2D::Rotate90CW,
        )
        .unwrap();
    let remaining = runner.grid().cell(0).n_possibilities();
    assert!(remaining >= 1 && remaining < 24, "got {remaining}");

    assert!(runner.tick_n(1));
    let option = runner.grid().cell(0).chosen().unwrap();
    let catalog = runner.catalog();
    let wanted = catalog
        .face_identifiers_for(fixtures::ASYMMETRIC, Direction::MaxZ, Transform2D::Rotate90CW)
        .unwrap();
    let key = catalog.options()[option].face(Direction::MaxZ);
    assert_eq!(catalog.face_identifiers(key), &wanted);
}
