//! Error types for encoding, solving and artifact handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// A run parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed DIMACS input
    Dimacs {
        /// One-based line number of the offending line
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
    },

    /// The clause solver failed
    Solver {
        /// Message reported by the solver
        reason: String,
    },

    /// The cardinality encoder could not encode the constraint
    Cardinality {
        /// Description of the failure
        reason: String,
    },

    /// A decoded tiling violates the lattice geometry
    ///
    /// Only raised when solutions are re-checked after decoding.
    InvalidSolution {
        /// One-based index of the solution in output order
        index: usize,
        /// Description of the first violation found
        reason: String,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Dimacs { line, reason } => {
                write!(f, "Malformed DIMACS at line {line}: {reason}")
            }
            Self::Solver { reason } => write!(f, "Solver failure: {reason}"),
            Self::Cardinality { reason } => write!(f, "Cardinality encoding failure: {reason}"),
            Self::InvalidSolution { index, reason } => {
                write!(f, "Solution {index} violates the tiling rules: {reason}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attach a path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`TilingError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| TilingError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a solver error
pub fn solver_error(reason: &impl ToString) -> TilingError {
    TilingError::Solver {
        reason: reason.to_string(),
    }
}

/// Create a cardinality encoding error
pub fn cardinality_error(reason: &impl ToString) -> TilingError {
    TilingError::Cardinality {
        reason: reason.to_string(),
    }
}

/// Create a DIMACS parse error
pub fn dimacs_error(line: usize, reason: &impl ToString) -> TilingError {
    TilingError::Dimacs {
        line,
        reason: reason.to_string(),
    }
}
