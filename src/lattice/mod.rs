//! Geometry of the skewed triangular lattice that hosts the rhombus centres
//!
//! This module contains:
//! - Toroidal cell addressing
//! - The three rhombus orientations and their offset tables
//! - Footprint and margin computation for a single placement
//! - Sector sets, border labels and their enumeration

/// Sector sets around a vertex and border-label enumeration
pub mod borders;
/// Covered cells and conflicting placements of a single tile
pub mod footprint;
/// Rhombus orientations and their static geometry tables
pub mod orientation;
/// Toroidal addressing of lattice cells
pub mod torus;

pub use borders::{SectorSet, enumerate_borders};
pub use footprint::{Placement, footprint_and_margin};
pub use orientation::Orientation;
pub use torus::{Cell, Offset, Torus};
