//! Decoding solver models into tilings

use crate::encoding::clause::Literal;
use crate::encoding::registry::VariableRegistry;
use crate::lattice::{Cell, Orientation};
use std::fmt;

/// A tiling: the placed tiles, kept sorted by cell then orientation
///
/// Solutions order lexicographically over their sorted placements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    placements: Vec<(Cell, Orientation)>,
}

impl Solution {
    /// Build a solution from placements in any order
    pub fn new(mut placements: Vec<(Cell, Orientation)>) -> Self {
        placements.sort_unstable();
        Self { placements }
    }

    /// Placements in sorted order
    pub fn placements(&self) -> &[(Cell, Orientation)] {
        &self.placements
    }

    /// Number of placed tiles
    pub const fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no tile is placed
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Orientations of the tiles centred at `cell`
    pub fn orientations_at(&self, cell: Cell) -> impl Iterator<Item = Orientation> + '_ {
        self.placements
            .iter()
            .filter(move |(placed, _)| *placed == cell)
            .map(|&(_, orientation)| orientation)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (cell, orientation)) in self.placements.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{cell}{orientation}")?;
        }
        Ok(())
    }
}

/// Placements whose orientation variable is true in `model`
///
/// Literals that are negative or name a non-orientation variable are ignored.
pub fn decode_model(model: &[Literal], registry: &VariableRegistry) -> Solution {
    Solution::new(
        model
            .iter()
            .filter(|&&literal| literal > 0)
            .filter_map(|literal| registry.orientation_of(literal.unsigned_abs()))
            .collect(),
    )
}

/// Sort solutions into output order
pub fn sort_solutions(solutions: &mut [Solution]) {
    solutions.sort_unstable();
}
