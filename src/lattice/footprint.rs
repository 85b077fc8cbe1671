//! Covered cells and conflicting placements of a single tile
//!
//! The margin of a placement merges two independent tables: conflicts with
//! the shared core (where another orientation's own cells would land) and
//! conflicts hand-derived for each orientation pair.

use crate::lattice::orientation::{CORE_OFFSETS, Orientation};
use crate::lattice::torus::{Cell, Torus};

/// Cells a tile covers and the placements it rules out
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The centre of the tile
    pub cell: Cell,
    /// The orientation of the tile
    pub orientation: Orientation,
    /// The eight lattice cells covered by the tile
    pub footprint: Vec<Cell>,
    /// Placements elsewhere that would overlap this tile
    pub margin: Vec<(Cell, Orientation)>,
}

/// Cells covered by a tile of `orientation` centred at `cell`
///
/// Six shared core cells followed by the two orientation-specific ones.
pub fn footprint(torus: &Torus, cell: Cell, orientation: Orientation) -> Vec<Cell> {
    CORE_OFFSETS
        .iter()
        .chain(orientation.specific_offsets())
        .map(|&offset| torus.translate(cell, offset))
        .collect()
}

/// Foreign placements whose own specific cells coincide with this tile's
///
/// Two entries for each of the other orientations.
pub fn shared_core_conflicts(
    torus: &Torus,
    cell: Cell,
    orientation: Orientation,
) -> Vec<(Cell, Orientation)> {
    orientation
        .others()
        .flat_map(|other| {
            other
                .specific_offsets()
                .iter()
                .map(move |&offset| (torus.translate(cell, offset), other))
        })
        .collect()
}

/// Placements that overlap only at the hand-derived relative positions
pub fn orientation_conflicts(
    torus: &Torus,
    cell: Cell,
    orientation: Orientation,
) -> Vec<(Cell, Orientation)> {
    orientation
        .forbidden_offsets()
        .iter()
        .map(|forbidden| (torus.translate(cell, forbidden.offset), forbidden.orientation))
        .collect()
}

/// Footprint and margin of a tile of `orientation` centred at `cell`
pub fn footprint_and_margin(torus: &Torus, cell: Cell, orientation: Orientation) -> Placement {
    let mut margin = shared_core_conflicts(torus, cell, orientation);
    margin.extend(orientation_conflicts(torus, cell, orientation));

    Placement {
        cell,
        orientation,
        footprint: footprint(torus, cell, orientation),
        margin,
    }
}
