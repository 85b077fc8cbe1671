//! Command-line interface for encoding and enumerating rhombic tilings

use crate::algorithm::executor::{TilingConfig, TilingExecutor};
use crate::algorithm::solver::VarisatSolver;
use crate::encoding::strategy::Strategy;
use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR, DEFAULT_STRATEGY, cnf_file_name, solution_file_name,
};
use crate::io::dimacs::write_dimacs_file;
use crate::io::error::{Result, WithPath};
use crate::io::progress::SolveProgress;
use crate::io::solutions::write_solutions_file;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rhombic")]
#[command(
    author,
    version,
    about = "Encode rhombic tilings of a toroidal hexagon as SAT and enumerate them",
    after_help = "Example: rhombic 3 border"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Grid half-size; the torus is 2n x 2n and holds n² tiles
    #[arg(value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub n: u32,

    /// Constraint encoding
    #[arg(value_enum, default_value_t = DEFAULT_STRATEGY)]
    pub strategy: Strategy,

    /// Directory the CNF and solution files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Re-check every decoded tiling against the lattice geometry
    #[arg(short, long)]
    pub verify: bool,

    /// Write the CNF file and stop without solving
    #[arg(short, long)]
    pub cnf_only: bool,
}

impl Cli {
    /// Run configuration described by the arguments
    pub const fn config(&self) -> TilingConfig {
        TilingConfig::new(self.n as usize, self.strategy)
    }

    /// Path of the DIMACS artifact
    pub fn cnf_path(&self) -> PathBuf {
        self.output_dir.join(cnf_file_name(self.n as usize, self.strategy))
    }

    /// Path of the solution artifact
    pub fn solution_path(&self) -> PathBuf {
        self.output_dir.join(solution_file_name(self.n as usize, self.strategy))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// What a completed run produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the DIMACS formula was written
    pub cnf_path: PathBuf,
    /// Where the solutions were written, unless solving was skipped
    pub solution_path: Option<PathBuf>,
    /// Number of tilings found, zero when solving was skipped
    pub solution_count: usize,
}

/// Orchestrates one encode, write, solve and export cycle
pub struct RunProcessor {
    cli: Cli,
}

impl RunProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Encode, write the CNF artifact, solve and write the solution artifact
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, solving, verification or any file
    /// operation fails
    pub fn process(&self) -> Result<RunSummary> {
        let executor = TilingExecutor::new(self.cli.config())?;

        std::fs::create_dir_all(&self.cli.output_dir)
            .with_path(&self.cli.output_dir, "create directory")?;

        let cnf_path = self.cli.cnf_path();
        write_dimacs_file(executor.formula(), &cnf_path)?;
        info!("DIMACS CNF file written to {}", cnf_path.display());

        if self.cli.cnf_only {
            return Ok(RunSummary {
                cnf_path,
                solution_path: None,
                solution_count: 0,
            });
        }

        let progress = if self.cli.should_show_progress() {
            SolveProgress::new(&format!("n={} {}", self.cli.n, self.cli.strategy))
        } else {
            SolveProgress::hidden()
        };

        let solutions =
            executor.solve_with(&mut VarisatSolver::new(), |_| progress.record_solution())?;
        progress.finish();

        if self.cli.verify {
            executor.verify(&solutions)?;
        }

        let solution_path = self.cli.solution_path();
        write_solutions_file(&solutions, &solution_path)?;
        info!(
            count = solutions.len(),
            "Solution file written to {}",
            solution_path.display()
        );

        Ok(RunSummary {
            cnf_path,
            solution_path: Some(solution_path),
            solution_count: solutions.len(),
        })
    }
}
