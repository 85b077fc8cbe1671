//! Geometric re-checks of decoded tilings
//!
//! These checks work from the lattice tables directly rather than from the
//! clauses, so they catch encoding mistakes as well as solver ones.

use crate::algorithm::decoder::Solution;
use crate::encoding::strategy::Strategy;
use crate::lattice::{Cell, Orientation, SectorSet, Torus, enumerate_borders, footprint_and_margin};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A placed tile
pub type Tile = (Cell, Orientation);

/// A broken tiling rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The number of placed tiles differs from `n²`
    TileCount {
        /// Required number of tiles
        expected: usize,
        /// Number of tiles in the solution
        found: usize,
    },
    /// A cell hosts more than one orientation
    SharedCentre {
        /// The cell with several tiles
        cell: Cell,
    },
    /// A tile is centred on a cell covered by another tile
    FootprintOverlap {
        /// The covering tile
        tile: Tile,
        /// The tile centred inside it
        other: Tile,
    },
    /// A tile sits in another tile's margin
    MarginCollision {
        /// The tile whose margin is hit
        tile: Tile,
        /// The colliding tile
        other: Tile,
    },
    /// A neighbour vertex required to carry an edge label hosts a tile
    OccupiedNeighbour {
        /// The tile imposing the edge
        tile: Tile,
        /// The occupied neighbour
        neighbour: Cell,
    },
    /// No single border label satisfies every tile around a vertex
    BorderMismatch {
        /// The vertex with incompatible edge requirements
        neighbour: Cell,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileCount { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
            Self::SharedCentre { cell } => write!(f, "cell {cell} hosts several tiles"),
            Self::FootprintOverlap { tile, other } => write!(
                f,
                "{}{} is centred inside {}{}",
                other.0, other.1, tile.0, tile.1
            ),
            Self::MarginCollision { tile, other } => write!(
                f,
                "{}{} collides with the margin of {}{}",
                other.0, other.1, tile.0, tile.1
            ),
            Self::OccupiedNeighbour { tile, neighbour } => write!(
                f,
                "edge of {}{} passes through occupied cell {neighbour}",
                tile.0, tile.1
            ),
            Self::BorderMismatch { neighbour } => {
                write!(f, "no border label fits every edge at {neighbour}")
            }
        }
    }
}

/// Tile count and single-orientation checks shared by both strategies
pub fn structural_violations(solution: &Solution, n: usize) -> Vec<Violation> {
    let mut violations = Vec::new();

    let expected = n * n;
    if solution.len() != expected {
        violations.push(Violation::TileCount {
            expected,
            found: solution.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for &(cell, _) in solution.placements() {
        if !seen.insert(cell) {
            violations.push(Violation::SharedCentre { cell });
        }
    }

    violations
}

/// Footprint overlaps and margin collisions between distinct tiles
pub fn area_violations(solution: &Solution, torus: &Torus) -> Vec<Violation> {
    let mut violations = Vec::new();

    for &tile in solution.placements() {
        let placement = footprint_and_margin(torus, tile.0, tile.1);
        for &other in solution.placements() {
            if other == tile {
                continue;
            }
            if placement.footprint.contains(&other.0) {
                violations.push(Violation::FootprintOverlap { tile, other });
            }
            if placement.margin.contains(&other) {
                violations.push(Violation::MarginCollision { tile, other });
            }
        }
    }

    violations
}

/// Edge agreement around every vertex next to a tile
pub fn border_violations(solution: &Solution, torus: &Torus) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut candidates: BTreeMap<Cell, BTreeSet<SectorSet>> = BTreeMap::new();

    for &tile in solution.placements() {
        for pattern in tile.1.border_patterns() {
            let neighbour = torus.translate(tile.0, pattern.offset);
            if solution.orientations_at(neighbour).next().is_some() {
                violations.push(Violation::OccupiedNeighbour { tile, neighbour });
                continue;
            }

            let allowed: BTreeSet<SectorSet> = enumerate_borders(pattern.border, pattern.inside)
                .into_iter()
                .collect();
            candidates
                .entry(neighbour)
                .and_modify(|labels| labels.retain(|label| allowed.contains(label)))
                .or_insert(allowed);
        }
    }

    violations.extend(
        candidates
            .into_iter()
            .filter(|(_, labels)| labels.is_empty())
            .map(|(neighbour, _)| Violation::BorderMismatch { neighbour }),
    );

    violations
}

/// Every violation of `solution` under the rules of `strategy`
pub fn validate(solution: &Solution, torus: &Torus, n: usize, strategy: Strategy) -> Vec<Violation> {
    let mut violations = structural_violations(solution, n);
    match strategy {
        Strategy::Area => violations.extend(area_violations(solution, torus)),
        Strategy::Border => violations.extend(border_violations(solution, torus)),
    }
    violations
}
