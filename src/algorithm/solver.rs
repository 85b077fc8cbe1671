//! Clause solver seam and model enumeration
//!
//! The solver is a black box that answers "is there a model" and hands the
//! model back. Enumeration blocks each model over a projection of the
//! variables, so two models that differ only outside the projection count
//! once.

use crate::encoding::clause::{Literal, negative, positive};
use crate::encoding::registry::VarId;
use crate::io::error::{Result, solver_error};
use std::collections::HashSet;
use varisat::{ExtendFormula, Lit};

/// A complete assignment, one signed literal per variable
pub type Model = Vec<Literal>;

/// Incremental satisfiability oracle
pub trait ClauseSolver {
    /// Add a clause given as DIMACS literals
    fn add_clause(&mut self, clause: &[Literal]);

    /// Decide satisfiability of every clause added so far
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying solver fails
    fn solve(&mut self) -> Result<bool>;

    /// The model found by the last successful [`ClauseSolver::solve`]
    fn model(&self) -> Option<Model>;
}

/// [`ClauseSolver`] backed by the `varisat` CDCL solver
pub struct VarisatSolver {
    inner: varisat::Solver<'static>,
}

impl Default for VarisatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VarisatSolver {
    /// Create a solver with no clauses
    pub fn new() -> Self {
        Self {
            inner: varisat::Solver::new(),
        }
    }
}

impl ClauseSolver for VarisatSolver {
    fn add_clause(&mut self, clause: &[Literal]) {
        let literals: Vec<Lit> = clause
            .iter()
            .map(|&literal| Lit::from_dimacs(literal as isize))
            .collect();
        self.inner.add_clause(&literals);
    }

    fn solve(&mut self) -> Result<bool> {
        self.inner.solve().map_err(|error| solver_error(&error))
    }

    fn model(&self) -> Option<Model> {
        self.inner.model().map(|literals| {
            literals
                .into_iter()
                .map(|literal| literal.to_dimacs() as Literal)
                .collect()
        })
    }
}

/// Clause ruling out every model that agrees with `model` on `projection`
pub fn blocking_clause(model: &[Literal], projection: &[VarId]) -> Vec<Literal> {
    let holds: HashSet<VarId> = model
        .iter()
        .filter(|&&literal| literal > 0)
        .map(|literal| literal.unsigned_abs())
        .collect();

    projection
        .iter()
        .map(|&id| {
            if holds.contains(&id) {
                negative(id)
            } else {
                positive(id)
            }
        })
        .collect()
}

/// Lazy sequence of models, each distinct on the projection
///
/// Ends once the solver reports unsatisfiable or fails; a failure is yielded
/// once and ends the sequence.
pub struct ModelEnumerator<'s, S: ClauseSolver> {
    solver: &'s mut S,
    projection: Vec<VarId>,
    exhausted: bool,
}

impl<S: ClauseSolver> Iterator for ModelEnumerator<'_, S> {
    type Item = Result<Model>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.solver.solve() {
            Err(error) => {
                self.exhausted = true;
                Some(Err(error))
            }
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Ok(true) => {
                let Some(model) = self.solver.model() else {
                    self.exhausted = true;
                    return Some(Err(solver_error(&"satisfiable formula produced no model")));
                };

                let blocking = blocking_clause(&model, &self.projection);
                if blocking.is_empty() {
                    // Nothing to distinguish further models by
                    self.exhausted = true;
                } else {
                    self.solver.add_clause(&blocking);
                }
                Some(Ok(model))
            }
        }
    }
}

/// Enumerate the models of `solver`, distinct on `projection`
pub const fn enumerate_models<S: ClauseSolver>(
    solver: &mut S,
    projection: Vec<VarId>,
) -> ModelEnumerator<'_, S> {
    ModelEnumerator {
        solver,
        projection,
        exhausted: false,
    }
}
