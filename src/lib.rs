//! SAT encoding and exhaustive enumeration of rhombic tilings
//!
//! A `2n × 2n` toroidal triangular lattice is tiled with `n²` rhombi, each in
//! one of three orientations. The tiling rules are encoded as clauses, either
//! by excluding overlapping areas or by matching tile borders around every
//! vertex, then a SAT solver enumerates every tiling.

#![forbid(unsafe_code)]

/// Formula construction, solving, decoding and validation
pub mod algorithm;
/// Boolean encodings of the tiling rules
pub mod encoding;
/// Command line, artifacts, logging and error handling
pub mod io;
/// Geometry of the toroidal triangular lattice
pub mod lattice;

pub use algorithm::decoder::Solution;
pub use algorithm::executor::{TilingConfig, TilingExecutor};
pub use encoding::Strategy;
pub use io::error::{Result, TilingError};
