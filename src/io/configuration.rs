//! Artifact naming and runtime configuration defaults

use crate::encoding::strategy::Strategy;

/// Prefix of the DIMACS artifact name
pub const CNF_PREFIX: &str = "rhombic-tiling-";
/// Extension of the DIMACS artifact
pub const CNF_EXTENSION: &str = "cnf";

/// Prefix of the solution artifact name
pub const SOLUTION_PREFIX: &str = "rhombic";
/// Extension of the solution artifact
pub const SOLUTION_EXTENSION: &str = "csv";

/// Directory artifacts are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Default encoding when the command line names none
pub const DEFAULT_STRATEGY: Strategy = Strategy::Area;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used in quiet mode
pub const QUIET_LOG_FILTER: &str = "warn";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;

/// File name of the DIMACS artifact, e.g. `rhombic-tiling-2x2-area.cnf`
pub fn cnf_file_name(n: usize, strategy: Strategy) -> String {
    format!("{CNF_PREFIX}{n}x{n}-{strategy}.{CNF_EXTENSION}")
}

/// File name of the solution artifact, e.g. `rhombic2x2-border.csv`
pub fn solution_file_name(n: usize, strategy: Strategy) -> String {
    format!("{SOLUTION_PREFIX}{n}x{n}-{strategy}.{SOLUTION_EXTENSION}")
}
