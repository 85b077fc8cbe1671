//! Boolean encodings of the rhombic tiling problem
//!
//! Both strategies share the variable registry and emit plain clause lists;
//! the cardinality constraint is appended afterwards by the executor.

/// Area-exclusion clause generator
pub mod area;
/// Border-matching clause generator
pub mod border;
/// Exactly-k constraints over orientation variables
pub mod cardinality;
/// Clauses, literals and clause sets
pub mod clause;
/// Variable allocation for `(cell, label)` propositions
pub mod registry;
/// Choice between the two encodings
pub mod strategy;

pub use cardinality::{CardinalityEncoder, EncodedCardinality, Totalizer};
pub use clause::{Clause, ClauseSet, Literal};
pub use registry::{Label, VarId, VariableRegistry};
pub use strategy::Strategy;

use crate::lattice::Torus;

/// Emit the clauses of `strategy` for every cell of `torus`
pub fn generate_constraints(
    strategy: Strategy,
    torus: &Torus,
    registry: &mut VariableRegistry,
) -> Vec<Clause> {
    match strategy {
        Strategy::Area => area::area_constraints(torus, registry),
        Strategy::Border => border::border_constraints(torus, registry),
    }
}
