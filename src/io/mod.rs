/// Command-line parsing and run orchestration
pub mod cli;
/// Artifact naming and runtime defaults
pub mod configuration;
/// DIMACS CNF reading and writing
pub mod dimacs;
/// Error types and helpers
pub mod error;
/// Structured logging setup
pub mod logging;
/// Spinner feedback during enumeration
pub mod progress;
/// Solution artifact writing
pub mod solutions;
