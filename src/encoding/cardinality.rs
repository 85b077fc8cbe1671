//! Exactly-k constraints over orientation variables
//!
//! The tiling needs exactly `n²` placements. The encoder is a seam: anything
//! that turns "exactly k of these ids hold" into clauses over fresh auxiliary
//! ids above a given top id will do. [`Totalizer`] delegates to the `rustsat`
//! totalizer.

use crate::encoding::clause::Clause;
use crate::encoding::registry::VarId;
use crate::io::error::{Result, cardinality_error};
use rustsat::encodings::card::{self, BoundBoth};
use rustsat::instances::{BasicVarManager, Cnf, ManageVars};
use rustsat::types::Lit;

/// Clauses produced by a cardinality encoder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedCardinality {
    /// Clauses equivalent to the constraint, over the inputs and auxiliaries
    pub clauses: Vec<Clause>,
    /// Largest id in use after auxiliary allocation
    pub top_id: VarId,
}

/// Converts "exactly `bound` of `variables` hold" into clauses
pub trait CardinalityEncoder {
    /// Encode the constraint with auxiliaries allocated above `top_id`
    ///
    /// # Errors
    ///
    /// Returns an error if an id lies outside the DIMACS literal range or the
    /// encoding cannot be built
    fn exactly(
        &self,
        variables: &[VarId],
        bound: usize,
        top_id: VarId,
    ) -> Result<EncodedCardinality>;
}

/// Totalizer encoding bounded from both sides at `bound`
///
/// Ids must stay within the positive `i32` range used by DIMACS literals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Totalizer;

fn to_lit(id: VarId) -> Result<Lit> {
    i32::try_from(id)
        .ok()
        .and_then(|literal| Lit::from_ipasir(literal).ok())
        .ok_or_else(|| cardinality_error(&format!("variable {id} outside the literal range")))
}

impl CardinalityEncoder for Totalizer {
    fn exactly(
        &self,
        variables: &[VarId],
        bound: usize,
        top_id: VarId,
    ) -> Result<EncodedCardinality> {
        if bound > variables.len() {
            return Ok(EncodedCardinality {
                clauses: vec![Clause::new(Vec::new())],
                top_id,
            });
        }

        let inputs = variables
            .iter()
            .map(|&id| to_lit(id))
            .collect::<Result<Vec<_>>>()?;

        // Auxiliaries start right after `top_id`
        let mut var_manager = BasicVarManager::default();
        let next_free = top_id
            .checked_add(1)
            .ok_or_else(|| cardinality_error(&"no ids left above the top id"))
            .and_then(to_lit)?;
        var_manager.increase_next_free(next_free.var());

        let mut totalizer = card::Totalizer::default();
        totalizer.extend(inputs);

        let mut encoding = Cnf::new();
        totalizer
            .encode_both(bound..=bound, &mut encoding, &mut var_manager)
            .map_err(|error| cardinality_error(&error))?;
        let units = totalizer
            .enforce_eq(bound)
            .map_err(|error| cardinality_error(&error))?;

        let mut clauses: Vec<Clause> = encoding
            .into_iter()
            .map(|clause| Clause::new(clause.into_iter().map(Lit::to_ipasir).collect()))
            .collect();
        clauses.extend(units.into_iter().map(|unit| Clause::unit(unit.to_ipasir())));

        Ok(EncodedCardinality {
            clauses,
            top_id: top_id.max(var_manager.n_used()),
        })
    }
}
