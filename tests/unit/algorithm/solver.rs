//! Tests for the solver seam and projected model enumeration

#[cfg(test)]
mod tests {
    use rhombic_tiling::Result;
    use rhombic_tiling::algorithm::solver::{
        ClauseSolver, Model, VarisatSolver, blocking_clause, enumerate_models,
    };
    use rhombic_tiling::encoding::Literal;
    use rhombic_tiling::io::error::solver_error;

    fn solver_with(clauses: &[&[Literal]]) -> VarisatSolver {
        let mut solver = VarisatSolver::new();
        for clause in clauses {
            solver.add_clause(clause);
        }
        solver
    }

    #[test]
    fn test_enumerate_exclusive_pair() {
        let mut solver = solver_with(&[&[1, 2], &[-1, -2]]);
        let models: Vec<Model> = enumerate_models(&mut solver, vec![1, 2])
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(models.len(), 2);
        let mut true_vars: Vec<Vec<Literal>> = models
            .iter()
            .map(|model| model.iter().copied().filter(|&l| l > 0).collect())
            .collect();
        true_vars.sort();
        assert_eq!(true_vars, vec![vec![1], vec![2]]);
    }

    // Tests models differing only outside the projection are reported once
    // Verified by blocking over every variable of the model
    #[test]
    fn test_projection_collapses_models() {
        let mut solver = solver_with(&[&[1, 2, 3]]);
        let projected = enumerate_models(&mut solver, vec![1]).count();
        assert_eq!(projected, 2);

        let mut unprojected = solver_with(&[&[1, 2]]);
        assert_eq!(enumerate_models(&mut unprojected, Vec::new()).count(), 1);
    }

    #[test]
    fn test_unsatisfiable_yields_nothing() {
        let mut solver = solver_with(&[&[1], &[-1]]);
        assert_eq!(enumerate_models(&mut solver, vec![1]).count(), 0);
    }

    #[test]
    fn test_blocking_clause_flips_projection() {
        let model = vec![1, -2, 3, -4];
        assert_eq!(blocking_clause(&model, &[1, 2, 4]), vec![-1, 2, 4]);
        assert!(blocking_clause(&model, &[]).is_empty());
        // Variables absent from the model count as false
        assert_eq!(blocking_clause(&model, &[9]), vec![9]);
    }

    struct FailingSolver {
        solves: usize,
    }

    impl ClauseSolver for FailingSolver {
        fn add_clause(&mut self, _clause: &[Literal]) {}

        fn solve(&mut self) -> Result<bool> {
            self.solves += 1;
            Err(solver_error(&"out of memory"))
        }

        fn model(&self) -> Option<Model> {
            None
        }
    }

    // Tests a solver failure is reported once and ends the enumeration
    // Verified by retrying the solver after an error
    #[test]
    fn test_failure_ends_enumeration() {
        let mut solver = FailingSolver { solves: 0 };
        let mut models = enumerate_models(&mut solver, vec![1]);

        assert!(models.next().unwrap().is_err());
        assert!(models.next().is_none());
        assert!(models.next().is_none());
        assert_eq!(solver.solves, 1);
    }

    struct ModelessSolver;

    impl ClauseSolver for ModelessSolver {
        fn add_clause(&mut self, _clause: &[Literal]) {}

        fn solve(&mut self) -> Result<bool> {
            Ok(true)
        }

        fn model(&self) -> Option<Model> {
            None
        }
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let mut solver = ModelessSolver;
        let results: Vec<_> = enumerate_models(&mut solver, vec![1]).collect();
        assert_eq!(results.len(), 1);
        assert!(results.first().unwrap().is_err());
    }
}
