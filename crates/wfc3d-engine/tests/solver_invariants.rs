//! Integration test: domain invariants across whole runs.
//!
//! Drives the pipe catalog tick by tick and checks after every tick that
//! the grid is arc-consistent (unless a contradiction is pending) and that
//! no domain grew unless a recovery ran. Also checks that a run is a pure
//! function of its catalog, dimensions and seed.

use proptest::prelude::*;
use wfc3d_core::{TileId, Transform3D};
use wfc3d_engine::{RunState, SolverConfig, StandardRunner};
use wfc3d_test_utils::{assert_arc_consistent, assert_shrunk, domains, fixtures};

fn pipes_config(seed: u64, fuzziness: f32) -> SolverConfig {
    SolverConfig {
        dimensions: [4, 4, 3],
        seed,
        fuzziness,
        max_unwinding: 64,
        ..SolverConfig::default()
    }
}

fn final_grid(runner: &StandardRunner) -> Vec<Option<(TileId, Transform3D)>> {
    (0..runner.grid().len()).map(|i| runner.chosen(i)).collect()
}

// ── Per-tick invariants ──────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn every_tick_preserves_invariants(seed in any::<u64>(), fuzziness in 0.0f32..=1.0) {
        let mut runner = StandardRunner::new(&fixtures::pipes(), pipes_config(seed, fuzziness))
            .unwrap();
        assert_arc_consistent(runner.grid(), runner.catalog());

        for _ in 0..400 {
            let before = domains(runner.grid());
            let recoveries = runner.metrics().recoveries;
            let state = runner.tick();

            if runner.pending_contradiction().is_none() {
                assert_arc_consistent(runner.grid(), runner.catalog());
            }
            if runner.metrics().recoveries == recoveries {
                assert_shrunk(&before, runner.grid());
            }
            if state != RunState::Running {
                break;
            }
        }
    }
}

#[test]
fn construction_leaves_grid_arc_consistent() {
    let cfg = SolverConfig {
        dimensions: [3, 3, 3],
        periodic: [true, false, true],
        ..SolverConfig::default()
    };
    let runner = StandardRunner::new(&fixtures::pipes(), cfg).unwrap();
    assert_arc_consistent(runner.grid(), runner.catalog());
    assert!(runner.pending_contradiction().is_none());
}

#[test]
fn finished_grid_is_fully_compatible() {
    let mut runner = StandardRunner::new(&fixtures::two_colour(), SolverConfig {
        dimensions: [5, 4, 3],
        ..SolverConfig::default()
    })
    .unwrap();
    assert!(runner.tick_n(100));
    assert_arc_consistent(runner.grid(), runner.catalog());
    let first = runner.chosen(0);
    assert!(first.is_some());
    assert!((0..runner.grid().len()).all(|i| runner.chosen(i) == first));
}

// ── Determinism ──────────────────────────────────────────────────

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut runner = StandardRunner::new(&fixtures::pipes(), pipes_config(42, 0.3)).unwrap();
        runner.tick_n(5_000);
        (final_grid(&runner), runner.timestamp(), runner.metrics().clone())
    };
    assert_eq!(run(), run());
}

#[test]
fn unwrap_is_deterministic() {
    let catalog = fixtures::pipes();
    let a = catalog.unwrap().unwrap();
    let b = catalog.unwrap().unwrap();
    assert_eq!(a.n_options(), b.n_options());
    assert_eq!(a.n_face_keys(), b.n_face_keys());
    for (x, y) in a.options().iter().zip(b.options()) {
        assert_eq!(x, y);
    }
    for (id, _) in catalog.face_prototypes() {
        assert_eq!(a.prototype_first_id(id), b.prototype_first_id(id));
    }
}
