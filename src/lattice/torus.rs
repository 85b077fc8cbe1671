//! Toroidal addressing of lattice cells
//!
//! A finite tiling of the flat hexagon is modelled as the fundamental domain
//! of a periodic tiling, so every offset wraps in both axes and there are no
//! edge cells.

use std::fmt;

/// A vertex of the triangular lattice in skewed `(i, j)` coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// First skewed coordinate, always in `0..N`
    pub i: usize,
    /// Second skewed coordinate, always in `0..N`
    pub j: usize,
}

impl Cell {
    /// Create a cell from already reduced coordinates
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Dot separator keeps multi-digit coordinates such as `1.12` and `11.2` apart
        write!(f, "{}.{}", self.i, self.j)
    }
}

/// Relative displacement between two lattice cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Displacement along the first axis
    pub di: i64,
    /// Displacement along the second axis
    pub dj: i64,
}

impl Offset {
    /// Create an offset
    pub const fn new(di: i64, dj: i64) -> Self {
        Self { di, dj }
    }
}

/// The `N×N` torus of cells, `N = 2n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Torus {
    size: usize,
}

impl Torus {
    /// Create a torus with side length `size`
    ///
    /// A zero side length is bumped to one so that reduction stays total.
    pub const fn new(size: usize) -> Self {
        Self {
            size: if size == 0 { 1 } else { size },
        }
    }

    /// Torus for the tiling problem of half-size `n`
    pub const fn for_half_size(n: usize) -> Self {
        Self::new(2 * n)
    }

    /// Side length `N`
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the torus
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Reduce an arbitrary integer pair onto the torus
    pub const fn cell(&self, i: i64, j: i64) -> Cell {
        let modulus = self.size as i64;
        Cell::new(i.rem_euclid(modulus) as usize, j.rem_euclid(modulus) as usize)
    }

    /// Apply `offset` to `cell`, wrapping in both axes
    pub const fn translate(&self, cell: Cell, offset: Offset) -> Cell {
        self.cell(cell.i as i64 + offset.di, cell.j as i64 + offset.dj)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size).flat_map(move |i| (0..size).map(move |j| Cell::new(i, j)))
    }
}
