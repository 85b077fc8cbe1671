//! Area-exclusion clause generator
//!
//! Every placement excludes every placement centred on one of its covered
//! cells, every placement in its margin, and the other orientations at its
//! own centre. No positive clauses are emitted: occupancy is left entirely to
//! the cardinality constraint.

use crate::encoding::clause::Clause;
use crate::encoding::registry::VariableRegistry;
use crate::lattice::{Orientation, Torus, footprint_and_margin};

/// Binary exclusion clauses for every cell and orientation of `torus`
pub fn area_constraints(torus: &Torus, registry: &mut VariableRegistry) -> Vec<Clause> {
    let mut clauses = Vec::new();

    for cell in torus.cells() {
        for (index, &orientation) in Orientation::ALL.iter().enumerate() {
            let placement = footprint_and_margin(torus, cell, orientation);
            let own = registry.id_of(cell, orientation);

            for &covered in &placement.footprint {
                for other in Orientation::ALL {
                    let occupant = registry.id_of(covered, other);
                    clauses.push(Clause::exclusion(own, occupant));
                }
            }

            for &(conflict_cell, conflict_orientation) in &placement.margin {
                let conflict = registry.id_of(conflict_cell, conflict_orientation);
                clauses.push(Clause::exclusion(own, conflict));
            }

            // One orientation per cell
            for &other in Orientation::ALL.iter().skip(index + 1) {
                let sibling = registry.id_of(cell, other);
                clauses.push(Clause::exclusion(own, sibling));
            }
        }
    }

    clauses
}
