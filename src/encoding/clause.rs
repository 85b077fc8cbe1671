//! Clauses, literals and clause sets

use crate::encoding::registry::VarId;
use crate::io::error::{Result, invalid_parameter};

/// Signed DIMACS literal, positive when the variable must hold
pub type Literal = i32;

/// Largest variable id representable as a [`Literal`]
pub const MAX_VARIABLE: VarId = i32::MAX.unsigned_abs();

/// Literal asserting `id`
///
/// `id` must not exceed [`MAX_VARIABLE`]; see [`ensure_literal_range`].
pub const fn positive(id: VarId) -> Literal {
    id as Literal
}

/// Literal denying `id`
///
/// `id` must not exceed [`MAX_VARIABLE`]; see [`ensure_literal_range`].
pub const fn negative(id: VarId) -> Literal {
    -(id as Literal)
}

/// Check that every id up to `max_id` converts to a [`Literal`] without wrapping
///
/// # Errors
///
/// Returns an error if `max_id` exceeds [`MAX_VARIABLE`]
pub fn ensure_literal_range(max_id: VarId) -> Result<()> {
    if max_id > MAX_VARIABLE {
        return Err(invalid_parameter(
            "variables",
            &max_id,
            &format!("exceeds the literal range of {MAX_VARIABLE}"),
        ));
    }
    Ok(())
}

/// Disjunction of literals
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Clause over the given literals
    pub const fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// `¬a ∨ ¬b`: the two variables never hold together
    pub fn exclusion(a: VarId, b: VarId) -> Self {
        Self::new(vec![negative(a), negative(b)])
    }

    /// `¬premise ∨ c₁ ∨ … ∨ cₖ`: the premise forces one of the conclusions
    pub fn implication(premise: VarId, conclusions: impl IntoIterator<Item = VarId>) -> Self {
        Self::new(
            std::iter::once(negative(premise))
                .chain(conclusions.into_iter().map(positive))
                .collect(),
        )
    }

    /// Single-literal clause
    pub fn unit(literal: Literal) -> Self {
        Self::new(vec![literal])
    }

    /// Literals in insertion order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals
    pub const fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is empty, and so unsatisfiable
    pub const fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Largest variable id mentioned, zero for the empty clause
    pub fn max_variable(&self) -> VarId {
        self.literals
            .iter()
            .map(|literal| literal.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Whether the clause holds under the set of true variables
    pub fn is_satisfied_by(&self, holds: impl Fn(VarId) -> bool) -> bool {
        self.literals
            .iter()
            .any(|&literal| holds(literal.unsigned_abs()) == (literal > 0))
    }
}

/// Ordered clause list together with the number of variables it ranges over
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
    variable_count: VarId,
}

impl ClauseSet {
    /// Create an empty clause set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause, widening the variable range if needed
    pub fn push(&mut self, clause: Clause) {
        self.variable_count = self.variable_count.max(clause.max_variable());
        self.clauses.push(clause);
    }

    /// Declare that the formula ranges over at least `count` variables
    ///
    /// Auxiliary variables that happen to appear in no clause still count.
    pub fn reserve_variables(&mut self, count: VarId) {
        self.variable_count = self.variable_count.max(count);
    }

    /// Clauses in insertion order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of variables the formula ranges over
    pub const fn variable_count(&self) -> VarId {
        self.variable_count
    }

    /// Number of clauses
    pub const fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Total literal count across all clauses
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(Clause::len).sum()
    }
}

impl Extend<Clause> for ClauseSet {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        for clause in iter {
            self.push(clause);
        }
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
