//! Grid dimensions, periodicity and spatial queries.

use smallvec::SmallVec;
use wfc3d_core::Direction;

use crate::error::GridError;

/// A signed cell coordinate. Signed so that periodic axes can be
/// addressed from either side of the origin.
pub type Coord = [i32; 3];

/// The shape of a 3D grid: per-axis length and periodicity.
///
/// Cells are laid out X-fastest: `index = x + nx * (y + ny * z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    dims: [u32; 3],
    periodic: [bool; 3],
}

impl GridShape {
    /// Create a shape.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] if any axis is zero, and
    /// [`GridError::DimensionTooLarge`] if the cell count overflows `u32`
    /// or an axis does not fit in `i32`.
    pub fn new(dims: [u32; 3], periodic: [bool; 3]) -> Result<Self, GridError> {
        if dims.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        let total = dims
            .iter()
            .try_fold(1u32, |acc, &d| acc.checked_mul(d))
            .ok_or(GridError::DimensionTooLarge { dims })?;
        if total > i32::MAX as u32 {
            return Err(GridError::DimensionTooLarge { dims });
        }
        Ok(Self { dims, periodic })
    }

    /// Axis lengths.
    pub fn dims(&self) -> [u32; 3] {
        self.dims
    }

    /// Per-axis wrap flags.
    pub fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.dims.iter().map(|&d| d as usize).product()
    }

    /// Length of the longest axis.
    pub fn largest_dim(&self) -> u32 {
        self.dims.iter().copied().max().unwrap_or(0)
    }

    fn resolve_axis(&self, axis: usize, val: i32) -> Option<u32> {
        let n = self.dims[axis] as i32;
        if (0..n).contains(&val) {
            Some(val as u32)
        } else if self.periodic[axis] {
            Some(val.rem_euclid(n) as u32)
        } else {
            None
        }
    }

    /// Whether `pos` lies inside the grid without wrapping.
    pub fn contains(&self, pos: Coord) -> bool {
        (0..3).all(|a| pos[a] >= 0 && (pos[a] as u32) < self.dims[a])
    }

    /// Flat index of `pos`, wrapping on periodic axes.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] when `pos` leaves a non-periodic axis.
    pub fn index_of(&self, pos: Coord) -> Result<usize, GridError> {
        let mut c = [0u32; 3];
        for (axis, slot) in c.iter_mut().enumerate() {
            *slot = self
                .resolve_axis(axis, pos[axis])
                .ok_or(GridError::CoordOutOfBounds {
                    pos,
                    dims: self.dims,
                })?;
        }
        Ok(self.flat(c))
    }

    fn flat(&self, c: [u32; 3]) -> usize {
        let [nx, ny, _] = self.dims.map(|d| d as usize);
        c[0] as usize + nx * (c[1] as usize + ny * c[2] as usize)
    }

    /// Coordinate of a flat index.
    pub fn coord_of(&self, index: usize) -> Coord {
        let [nx, ny, _] = self.dims.map(|d| d as usize);
        [
            (index % nx) as i32,
            ((index / nx) % ny) as i32,
            (index / (nx * ny)) as i32,
        ]
    }

    /// The cell across face `dir`, or `None` across an open boundary.
    ///
    /// On a periodic axis of length 1 a cell is its own neighbour.
    pub fn neighbour(&self, index: usize, dir: Direction) -> Option<usize> {
        let mut pos = self.coord_of(index);
        pos[dir.axis()] += i32::from(dir.sign());
        self.index_of(pos).ok()
    }

    /// Every existing neighbour with the face it lies across.
    pub fn neighbours(&self, index: usize) -> SmallVec<[(Direction, usize); 6]> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbour(index, d).map(|n| (d, n)))
            .collect()
    }

    fn axis_distance(&self, axis: usize, a: i32, b: i32) -> u32 {
        let diff = (a - b).unsigned_abs();
        if self.periodic[axis] {
            diff.min(self.dims[axis] - diff)
        } else {
            diff
        }
    }

    /// Chebyshev distance between two cells, the short way round on
    /// periodic axes.
    pub fn distance(&self, a: usize, b: usize) -> u32 {
        let (pa, pb) = (self.coord_of(a), self.coord_of(b));
        (0..3)
            .map(|axis| self.axis_distance(axis, pa[axis], pb[axis]))
            .max()
            .unwrap_or(0)
    }

    /// Every cell within Chebyshev `radius` of `center`, ascending and
    /// without duplicates.
    pub fn region(&self, center: usize, radius: u32) -> Vec<usize> {
        let c = self.coord_of(center);
        let r = radius.min(self.largest_dim()) as i32;
        let mut out = Vec::new();
        for dz in -r..=r {
            for dy in -r..=r {
                for dx in -r..=r {
                    if let Ok(i) = self.index_of([c[0] + dx, c[1] + dy, c[2] + dz]) {
                        out.push(i);
                    }
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn open(dims: [u32; 3]) -> GridShape {
        GridShape::new(dims, [false; 3]).unwrap()
    }

    #[test]
    fn rejects_empty_and_huge() {
        assert_eq!(GridShape::new([0, 1, 1], [false; 3]), Err(GridError::EmptyGrid));
        match GridShape::new([u32::MAX, 2, 2], [false; 3]) {
            Err(GridError::DimensionTooLarge { .. }) => {}
            other => panic!("expected DimensionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn open_axis_rejects_out_of_range() {
        let s = open([3, 3, 3]);
        assert_eq!(s.index_of([2, 2, 2]), Ok(26));
        match s.index_of([3, 0, 0]) {
            Err(GridError::CoordOutOfBounds { pos, .. }) => assert_eq!(pos, [3, 0, 0]),
            other => panic!("expected CoordOutOfBounds, got {other:?}"),
        }
        assert!(s.index_of([0, -1, 0]).is_err());
    }

    #[test]
    fn periodic_axis_wraps() {
        let s = GridShape::new([4, 3, 2], [true, false, false]).unwrap();
        assert_eq!(s.index_of([-1, 0, 0]), s.index_of([3, 0, 0]));
        assert_eq!(s.index_of([5, 0, 0]), s.index_of([1, 0, 0]));
        assert_eq!(s.neighbour(0, Direction::MinX), Some(3));
        assert_eq!(s.neighbour(0, Direction::MinY), None);
    }

    #[test]
    fn interior_cell_has_six_neighbours() {
        let s = open([3, 3, 3]);
        let centre = s.index_of([1, 1, 1]).unwrap();
        assert_eq!(s.neighbours(centre).len(), 6);
        assert_eq!(s.neighbours(0).len(), 3);
    }

    #[test]
    fn region_clips_and_wraps() {
        let s = open([5, 5, 5]);
        assert_eq!(s.region(0, 1).len(), 8);
        let centre = s.index_of([2, 2, 2]).unwrap();
        assert_eq!(s.region(centre, 1).len(), 27);

        let ring = GridShape::new([4, 1, 1], [true, false, false]).unwrap();
        assert_eq!(ring.region(0, 1), vec![0, 1, 3]);
        assert_eq!(ring.region(0, 9), vec![0, 1, 2, 3]);
        assert_eq!(ring.distance(0, 3), 1);
    }

    proptest! {
        #[test]
        fn coord_round_trip(x in 0u32..5, y in 0u32..4, z in 0u32..3) {
            let s = open([5, 4, 3]);
            let pos = [x as i32, y as i32, z as i32];
            let i = s.index_of(pos).unwrap();
            prop_assert_eq!(s.coord_of(i), pos);
        }

        #[test]
        fn neighbour_is_symmetric(i in 0usize..60, d in 0usize..6, px: bool, py: bool) {
            let s = GridShape::new([5, 4, 3], [px, py, false]).unwrap();
            let dir = Direction::ALL[d];
            if let Some(n) = s.neighbour(i, dir) {
                prop_assert_eq!(s.neighbour(n, dir.opposite()), Some(i));
                prop_assert!(s.distance(i, n) <= 1);
            }
        }

        #[test]
        fn region_matches_distance(i in 0usize..60, r in 0u32..3, px: bool) {
            let s = GridShape::new([5, 4, 3], [px, false, true]).unwrap();
            let region = s.region(i, r);
            for j in 0..s.cell_count() {
                prop_assert_eq!(region.contains(&j), s.distance(i, j) <= r);
            }
        }
    }
}
