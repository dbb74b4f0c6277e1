//! wfc3d quickstart: build a catalog, solve a grid, read the result.
//!
//! Demonstrates:
//!   1. Declaring face prototypes and tiles
//!   2. Letting tiles appear in every rotation
//!   3. Pinning a cell and a face before solving
//!   4. Stepping a `Generator` to completion and querying cells
//!
//! Run with:
//!   cargo run --example quickstart

use wfc3d_catalog::{FacePrototype, ImplicitTransformSet, Tile, TileCatalog, TileFace};
use wfc3d_core::{Direction, FacePrototypeId, TileId, Transform2D, Transform3D};
use wfc3d_engine::{Generator, GeneratorStatus, SolverConfig};

// ─── Catalog ids ────────────────────────────────────────────────

const PLAIN: FacePrototypeId = FacePrototypeId(1);
const PIPE: FacePrototypeId = FacePrototypeId(2);

const EMPTY: TileId = TileId(10);
const STRAIGHT: TileId = TileId(11);
const ELBOW: TileId = TileId(12);

// ─── Grid parameters ────────────────────────────────────────────

const SIZE: u32 = 8;
const LAYERS: u32 = 3;

fn build_catalog() -> Result<TileCatalog, Box<dyn std::error::Error>> {
    let mut catalog = TileCatalog::new();
    catalog.add_face_prototype(PLAIN, FacePrototype::uniform("plain"))?;
    catalog.add_face_prototype(PIPE, FacePrototype::uniform("pipe"))?;

    let every_rotation = ImplicitTransformSet::all_rotations(false);

    catalog.add_tile(EMPTY, Tile::uniform(PLAIN).with_nickname("empty").with_weight(400));

    let mut straight = Tile::uniform(PLAIN)
        .with_nickname("straight")
        .with_transforms(every_rotation.clone());
    *straight.face_mut(Direction::MinX) = TileFace::new(PIPE);
    *straight.face_mut(Direction::MaxX) = TileFace::new(PIPE);
    catalog.add_tile(STRAIGHT, straight);

    let mut elbow = Tile::uniform(PLAIN)
        .with_nickname("elbow")
        .with_weight(60)
        .with_transforms(every_rotation);
    *elbow.face_mut(Direction::MinX) = TileFace::new(PIPE);
    *elbow.face_mut(Direction::MaxY) = TileFace::new(PIPE);
    catalog.add_tile(ELBOW, elbow);

    Ok(catalog)
}

fn glyph(tile: TileId) -> char {
    match tile {
        EMPTY => '.',
        STRAIGHT => '=',
        ELBOW => '+',
        _ => '?',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== wfc3d Quickstart ===\n");

    // 1. Catalog: empty space plus pipe pieces in every rotation.
    let catalog = build_catalog()?;
    println!("Catalog: {} tiles", catalog.n_tiles());

    // 2. Configure and start a run.
    let config = SolverConfig {
        dimensions: [SIZE, SIZE, LAYERS],
        seed: 7,
        max_unwinding: 200,
        ..SolverConfig::default()
    };
    let mut generator = Generator::new();
    generator.start(&catalog, config)?;
    println!(
        "Started: {} options per cell, progress {:.0}%",
        generator.n_tile_possibilities(),
        generator.progress() * 100.0
    );

    // 3. Force a pipe through the middle of the bottom layer, and keep
    //    the corner empty no matter what recovery does.
    let mid = (SIZE / 2) as i32;
    generator.set_face_constraint([mid, mid, 0], Direction::MaxX, PIPE, Transform2D::None)?;
    generator.set_cell([0, 0, 0], EMPTY, Transform3D::IDENTITY, true)?;

    // 4. Step manually for a while, then finish in one call.
    while generator.is_running() && generator.tick_count() < 10 {
        generator.tick()?;
    }
    println!(
        "After {} ticks: progress {:.0}%",
        generator.tick_count(),
        generator.progress() * 100.0
    );

    let finished = generator.run_to_end(10_000);
    println!(
        "Run {}: status {:?}, {} ticks",
        if finished { "finished" } else { "did not finish" },
        generator.status(),
        generator.tick_count()
    );
    if let Some(metrics) = generator.metrics() {
        println!(
            "  collapses {}, contradictions {}, recoveries {}",
            metrics.collapses, metrics.contradictions, metrics.recoveries
        );
    }

    // 5. Print the bottom layer.
    println!("\nLayer z=0:");
    for y in (0..SIZE as i32).rev() {
        let row: String = (0..SIZE as i32)
            .map(|x| {
                let cell = generator.cell([x, y, 0]);
                if cell.is_set {
                    glyph(cell.if_set.tile_id)
                } else {
                    ' '
                }
            })
            .collect();
        println!("  {row}");
    }

    let stats = generator.temperature_stats();
    println!(
        "\nUnsolved temperature: min {:.2}, median {:.2}, max {:.2}",
        stats.min, stats.median, stats.max
    );

    if generator.status() == GeneratorStatus::Finished {
        generator.cancel();
    }
    println!("\nDone.");
    Ok(())
}
