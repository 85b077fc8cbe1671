//! Formula construction and solution enumeration for one run
//!
//! The executor owns the variable registry and the clause set. Construction
//! runs the chosen generator and appends the cardinality constraint; solving
//! hands the finished formula to a [`ClauseSolver`] and decodes every model.

use crate::algorithm::decoder::{Solution, decode_model, sort_solutions};
use crate::algorithm::solver::{ClauseSolver, VarisatSolver, enumerate_models};
use crate::algorithm::validation::validate;
use crate::encoding::clause::ensure_literal_range;
use crate::encoding::{
    CardinalityEncoder, ClauseSet, Strategy, Totalizer, VariableRegistry, generate_constraints,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::lattice::Torus;
use tracing::{debug, info};

/// Parameters of one tiling run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilingConfig {
    /// Grid half-size; the torus is `2n × 2n` and holds `n²` tiles
    pub n: usize,
    /// Encoding used for geometric compatibility
    pub strategy: Strategy,
}

impl TilingConfig {
    /// Configuration for half-size `n` under `strategy`
    pub const fn new(n: usize, strategy: Strategy) -> Self {
        Self { n, strategy }
    }

    /// Side length `N = 2n` of the torus
    pub const fn grid_size(&self) -> usize {
        2 * self.n
    }

    /// Number of tiles `n²` in every solution
    pub const fn tile_count(&self) -> usize {
        self.n * self.n
    }

    /// Check that the configuration describes a non-empty problem
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(invalid_parameter(
                "n",
                &self.n,
                &"must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// Encoded tiling problem ready to be solved
pub struct TilingExecutor {
    config: TilingConfig,
    torus: Torus,
    registry: VariableRegistry,
    formula: ClauseSet,
}

impl TilingExecutor {
    /// Encode the problem with the bundled totalizer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the cardinality
    /// constraint cannot be encoded
    pub fn new(config: TilingConfig) -> Result<Self> {
        Self::with_encoder(config, &Totalizer)
    }

    /// Encode the problem with a caller-supplied cardinality encoder
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `encoder` fails
    pub fn with_encoder(config: TilingConfig, encoder: &impl CardinalityEncoder) -> Result<Self> {
        config.validate()?;

        let torus = Torus::for_half_size(config.n);
        let mut registry = VariableRegistry::new();

        let mut formula: ClauseSet = generate_constraints(config.strategy, &torus, &mut registry)
            .into_iter()
            .collect();
        ensure_literal_range(registry.max_id())?;
        formula.reserve_variables(registry.max_id());
        debug!(
            strategy = %config.strategy,
            variables = registry.max_id(),
            clauses = formula.len(),
            "geometric constraints generated"
        );

        let orientation_ids = registry.orientation_ids();
        let cardinality =
            encoder.exactly(&orientation_ids, config.tile_count(), registry.max_id())?;
        let cardinality_clauses = cardinality.clauses.len();
        formula.extend(cardinality.clauses);
        formula.reserve_variables(cardinality.top_id);

        info!(
            n = config.n,
            strategy = %config.strategy,
            variables = formula.variable_count(),
            clauses = formula.len(),
            literals = formula.literal_count(),
            cardinality_clauses,
            "formula encoded"
        );

        Ok(Self {
            config,
            torus,
            registry,
            formula,
        })
    }

    /// Run configuration
    pub const fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// The torus being tiled
    pub const fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Variables allocated by the generator
    pub const fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// The complete formula, cardinality clauses included
    pub const fn formula(&self) -> &ClauseSet {
        &self.formula
    }

    /// Enumerate every tiling with the bundled `varisat` solver
    ///
    /// # Errors
    ///
    /// Returns an error if the solver fails
    pub fn solve(&self) -> Result<Vec<Solution>> {
        self.solve_with(&mut VarisatSolver::new(), |_| {})
    }

    /// Enumerate every tiling with `solver`, reporting each as it is found
    ///
    /// Solutions are returned in output order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver fails
    pub fn solve_with<S: ClauseSolver>(
        &self,
        solver: &mut S,
        mut on_solution: impl FnMut(&Solution),
    ) -> Result<Vec<Solution>> {
        for clause in self.formula.clauses() {
            solver.add_clause(clause.literals());
        }

        let mut solutions = Vec::new();
        for model in enumerate_models(solver, self.registry.orientation_ids()) {
            let solution = decode_model(&model?, &self.registry);
            on_solution(&solution);
            solutions.push(solution);
        }

        sort_solutions(&mut solutions);
        info!(count = solutions.len(), "tilings enumerated");
        Ok(solutions)
    }

    /// Re-check every solution against the lattice geometry
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidSolution`] for the first solution that
    /// breaks a rule of the configured strategy
    pub fn verify(&self, solutions: &[Solution]) -> Result<()> {
        for (index, solution) in (1..).zip(solutions) {
            let violations = validate(solution, &self.torus, self.config.n, self.config.strategy);
            if let Some(first) = violations.first() {
                return Err(TilingError::InvalidSolution {
                    index,
                    reason: first.to_string(),
                });
            }
        }
        debug!(count = solutions.len(), "solutions verified");
        Ok(())
    }
}
