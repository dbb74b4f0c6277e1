//! Cell selection and weighted option draw.
//!
//! Selection scores every unset cell with
//! `ln(n) + (fuzziness * ln(N) + 1e-6) * r`, where `n` is the cell's option
//! count, `N` the catalog's, and `r` uniform in `[0, 1)`, and picks the
//! lowest score. At fuzziness 0 this is fewest-options-first with a random
//! tie-break; at 1 the noise spans the whole entropy range.

use rand::Rng;
use wfc3d_catalog::UnwrappedCatalog;
use wfc3d_grid::{DomainGrid, OptionSet};

const TIE_BREAK: f32 = 1e-6;

/// Pick the next cell to collapse, or `None` when no cell has two or more
/// options left.
pub fn select_cell<R: Rng>(grid: &DomainGrid, fuzziness: f32, rng: &mut R) -> Option<usize> {
    let total = grid.n_options().max(1) as f32;
    let noise = fuzziness * total.ln() + TIE_BREAK;
    let mut best: Option<(usize, f32)> = None;
    for (i, cell) in grid.cells().iter().enumerate() {
        let n = cell.n_possibilities();
        if n < 2 {
            continue;
        }
        let score = (n as f32).ln() + noise * rng.random::<f32>();
        if best.is_none_or(|(_, s)| score < s) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

/// Draw one option from `domain` with probability proportional to its
/// tile's weight, or uniformly if every weight is zero. `None` for an
/// empty domain.
pub fn choose_option<R: Rng>(
    domain: &OptionSet,
    catalog: &UnwrappedCatalog,
    rng: &mut R,
) -> Option<usize> {
    let total: u64 = domain
        .iter()
        .map(|o| u64::from(catalog.option_weight(o)))
        .sum();
    if total == 0 {
        let n = domain.len();
        if n == 0 {
            return None;
        }
        return domain.iter().nth(rng.random_range(0..n));
    }
    let mut target = rng.random_range(0..total);
    for o in domain {
        let w = u64::from(catalog.option_weight(o));
        if target < w {
            return Some(o);
        }
        target -= w;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use wfc3d_catalog::{FacePrototype, Tile, TileCatalog};
    use wfc3d_core::{FacePrototypeId, TileId};
    use wfc3d_grid::GridShape;

    fn weighted(weights: &[u32]) -> UnwrappedCatalog {
        let mut cat = TileCatalog::new();
        cat.add_face_prototype(FacePrototypeId(1), FacePrototype::uniform("f"))
            .unwrap();
        for (i, &w) in weights.iter().enumerate() {
            cat.add_tile(
                TileId(i as u32),
                Tile::uniform(FacePrototypeId(1)).with_weight(w),
            );
        }
        cat.unwrap().unwrap()
    }

    #[test]
    fn picks_fewest_options_without_fuzz() {
        let mut grid = DomainGrid::new(GridShape::new([4, 1, 1], [false; 3]).unwrap(), 5);
        grid.cell_mut(2).domain.remove(0);
        grid.cell_mut(2).domain.remove(1);
        grid.pin_cell(3, 0, false);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(select_cell(&grid, 0.0, &mut rng), Some(2));
        }
    }

    #[test]
    fn nothing_to_select_when_all_set() {
        let mut grid = DomainGrid::new(GridShape::new([2, 1, 1], [false; 3]).unwrap(), 3);
        grid.pin_cell(0, 1, false);
        grid.pin_cell(1, 2, false);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_cell(&grid, 1.0, &mut rng), None);
    }

    #[test]
    fn zero_weight_is_never_drawn_when_others_exist() {
        let cat = weighted(&[0, 10, 0]);
        let domain = OptionSet::full(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(choose_option(&domain, &cat, &mut rng), Some(1));
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let cat = weighted(&[0, 0, 0]);
        let domain = OptionSet::full(3);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let o = choose_option(&domain, &cat, &mut rng).unwrap();
            seen[o] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(choose_option(&OptionSet::empty(3), &cat, &mut rng), None);
    }

    #[test]
    fn draw_follows_weights() {
        let cat = weighted(&[1, 3]);
        let domain = OptionSet::full(2);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let heavy = (0..4000)
            .filter(|_| choose_option(&domain, &cat, &mut rng) == Some(1))
            .count();
        assert!((2700..3300).contains(&heavy), "heavy drawn {heavy} times");
    }
}
