//! Border-matching clause generator
//!
//! A tile constrains each of its eight surrounding vertices to carry a border
//! label compatible with the tile edge passing by. Each cell then carries at
//! most one label, orientation labels included.
//!
//! The formula holds `O(N² · 3 · 8)` implication clauses whose width is the
//! fanout of [`enumerate_borders`], plus `O(N² · L²)` binary exclusions where
//! `L` is the number of distinct border labels in use.

use crate::encoding::clause::Clause;
use crate::encoding::registry::{Label, VariableRegistry};
use crate::lattice::{Orientation, Torus, enumerate_borders};
use itertools::Itertools;

/// Implication and exclusion clauses for every cell of `torus`
pub fn border_constraints(torus: &Torus, registry: &mut VariableRegistry) -> Vec<Clause> {
    let mut clauses = border_implications(torus, registry);
    clauses.extend(label_exclusions(torus, registry));
    clauses
}

/// `orientation(cell) → ⋁ label(cell + offset)` for every border pattern
pub fn border_implications(torus: &Torus, registry: &mut VariableRegistry) -> Vec<Clause> {
    let mut clauses = Vec::new();

    for cell in torus.cells() {
        for orientation in Orientation::ALL {
            for pattern in orientation.border_patterns() {
                let premise = registry.id_of(cell, orientation);
                let neighbour = torus.translate(cell, pattern.offset);
                let labels: Vec<_> = enumerate_borders(pattern.border, pattern.inside)
                    .into_iter()
                    .map(|label| registry.id_of(neighbour, label))
                    .collect();
                clauses.push(Clause::implication(premise, labels));
            }
        }
    }

    clauses
}

/// Pairwise exclusion over every label in use, at every cell
///
/// The label universe is read from the registry, so this must run after the
/// implications have allocated their border labels.
pub fn label_exclusions(torus: &Torus, registry: &mut VariableRegistry) -> Vec<Clause> {
    let universe: Vec<Label> = registry
        .border_labels()
        .into_iter()
        .map(Label::Border)
        .chain(Orientation::ALL.into_iter().map(Label::Orientation))
        .collect();

    let mut clauses = Vec::new();
    for cell in torus.cells() {
        for (first, second) in universe.iter().tuple_combinations() {
            let a = registry.id_of(cell, *first);
            let b = registry.id_of(cell, *second);
            clauses.push(Clause::exclusion(a, b));
        }
    }

    clauses
}
