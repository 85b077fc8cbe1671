//! Rhombus orientations and their static geometry tables
//!
//! Hexagon around a placement centre `{0,0}` in skewed coordinates. Square
//! brackets mark the six shared core offsets, parentheses the offsets that
//! only one orientation covers, angle brackets a forbidden offset.
//!
//! ```text
//!                     (1,-2)    <2,-2>
//!                    /      \
//!     (-1,-1) -- [0,-1] -- [1,-1] -- (2,-1)
//!             \  /     \  /    \    /
//!          [-1,0]  -- {0,0}  -- [1,0]
//!             /  \     /  \     /  \
//!      (-2,1) -- [-1,1] -- [0,1] -- (1,1)
//!                    \      /
//!            <-2,2>   (-1,2)
//! ```
//!
//! Sectors around a vertex are numbered clockwise from the upper left:
//!
//! ```text
//!   1     2
//!     \ /
//! 6 -- ij -- 3
//!     / \
//!   5     4
//! ```

use crate::lattice::borders::SectorSet;
use crate::lattice::torus::Offset;
use std::fmt;

/// Rotational class of a rhombus placement
///
/// Variants are declared in output order (`N < NW < NE`), which differs from
/// the generation order in [`Orientation::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Long diagonal vertical
    North,
    /// Long diagonal leaning to the upper left
    NorthWest,
    /// Long diagonal leaning to the upper right
    NorthEast,
}

/// Neighbour offsets covered by every orientation
pub const CORE_OFFSETS: [Offset; 6] = [
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(0, 1),
    Offset::new(-1, 1),
    Offset::new(-1, 0),
];

/// A placement of `orientation` at `offset` that conflicts with the centre
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForbiddenOffset {
    /// Position of the conflicting placement relative to the centre
    pub offset: Offset,
    /// Orientation of the conflicting placement
    pub orientation: Orientation,
}

impl ForbiddenOffset {
    const fn new(di: i64, dj: i64, orientation: Orientation) -> Self {
        Self {
            offset: Offset::new(di, dj),
            orientation,
        }
    }
}

/// Constraint that a placement imposes on one neighbouring vertex
///
/// The neighbour at `offset` sees the tile edge along the `border` sectors and
/// the tile body over the `inside` sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderPattern {
    /// Neighbour position relative to the centre
    pub offset: Offset,
    /// Sectors known to lie on the tile edge
    pub border: SectorSet,
    /// Sectors known to be covered by the tile
    pub inside: SectorSet,
}

impl BorderPattern {
    const fn new(di: i64, dj: i64, border: &[u8], inside: &[u8]) -> Self {
        Self {
            offset: Offset::new(di, dj),
            border: SectorSet::of(border),
            inside: SectorSet::of(inside),
        }
    }
}

const NORTH_SPECIFIC: [Offset; 2] = [Offset::new(1, -2), Offset::new(-1, 2)];
const NORTH_WEST_SPECIFIC: [Offset; 2] = [Offset::new(-1, -1), Offset::new(1, 1)];
const NORTH_EAST_SPECIFIC: [Offset; 2] = [Offset::new(2, -1), Offset::new(-2, 1)];

const NORTH_FORBIDDEN: [ForbiddenOffset; 4] = [
    ForbiddenOffset::new(0, -2, Orientation::NorthWest),
    ForbiddenOffset::new(0, 2, Orientation::NorthWest),
    ForbiddenOffset::new(2, -2, Orientation::NorthEast),
    ForbiddenOffset::new(-2, 2, Orientation::NorthEast),
];
const NORTH_WEST_FORBIDDEN: [ForbiddenOffset; 4] = [
    ForbiddenOffset::new(0, 2, Orientation::North),
    ForbiddenOffset::new(0, -2, Orientation::North),
    ForbiddenOffset::new(-2, 0, Orientation::NorthEast),
    ForbiddenOffset::new(2, 0, Orientation::NorthEast),
];
const NORTH_EAST_FORBIDDEN: [ForbiddenOffset; 4] = [
    ForbiddenOffset::new(2, -2, Orientation::North),
    ForbiddenOffset::new(-2, 2, Orientation::North),
    ForbiddenOffset::new(-2, 0, Orientation::NorthWest),
    ForbiddenOffset::new(2, 0, Orientation::NorthWest),
];

const NORTH_PATTERNS: [BorderPattern; 8] = [
    BorderPattern::new(-1, 0, &[2, 4], &[3]),
    BorderPattern::new(1, 0, &[1, 5], &[6]),
    BorderPattern::new(0, -1, &[2, 5], &[3, 4]),
    BorderPattern::new(0, 1, &[2, 5], &[1, 6]),
    BorderPattern::new(1, -1, &[1, 4], &[5, 6]),
    BorderPattern::new(-1, 1, &[1, 4], &[2, 3]),
    // Acute corners
    BorderPattern::new(1, -2, &[4, 5], &[]),
    BorderPattern::new(-1, 2, &[1, 2], &[]),
];
const NORTH_WEST_PATTERNS: [BorderPattern; 8] = [
    BorderPattern::new(-1, 1, &[1, 3], &[2]),
    BorderPattern::new(1, -1, &[4, 6], &[5]),
    BorderPattern::new(0, -1, &[3, 6], &[4, 5]),
    BorderPattern::new(0, 1, &[3, 6], &[1, 2]),
    BorderPattern::new(-1, 0, &[1, 4], &[2, 3]),
    BorderPattern::new(1, 0, &[1, 4], &[5, 6]),
    // Acute corners
    BorderPattern::new(-1, -1, &[3, 4], &[]),
    BorderPattern::new(1, 1, &[1, 6], &[]),
];
const NORTH_EAST_PATTERNS: [BorderPattern; 8] = [
    BorderPattern::new(0, -1, &[3, 5], &[4]),
    BorderPattern::new(0, 1, &[2, 6], &[1]),
    BorderPattern::new(1, -1, &[3, 6], &[4, 5]),
    BorderPattern::new(-1, 1, &[3, 6], &[1, 2]),
    BorderPattern::new(-1, 0, &[2, 5], &[3, 4]),
    BorderPattern::new(1, 0, &[2, 5], &[1, 6]),
    // Acute corners
    BorderPattern::new(2, -1, &[5, 6], &[]),
    BorderPattern::new(-2, 1, &[2, 3], &[]),
];

impl Orientation {
    /// All orientations in generation order
    pub const ALL: [Self; 3] = [Self::NorthWest, Self::North, Self::NorthEast];

    /// Short compass name used in artifacts
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthWest => "NW",
            Self::North => "N",
            Self::NorthEast => "NE",
        }
    }

    /// The two offsets beyond the shared core that this orientation covers
    pub const fn specific_offsets(self) -> &'static [Offset; 2] {
        match self {
            Self::NorthWest => &NORTH_WEST_SPECIFIC,
            Self::North => &NORTH_SPECIFIC,
            Self::NorthEast => &NORTH_EAST_SPECIFIC,
        }
    }

    /// Placements that overlap this one only at specific relative positions
    pub const fn forbidden_offsets(self) -> &'static [ForbiddenOffset; 4] {
        match self {
            Self::NorthWest => &NORTH_WEST_FORBIDDEN,
            Self::North => &NORTH_FORBIDDEN,
            Self::NorthEast => &NORTH_EAST_FORBIDDEN,
        }
    }

    /// Neighbour constraints implied by a tile of this orientation
    pub const fn border_patterns(self) -> &'static [BorderPattern; 8] {
        match self {
            Self::NorthWest => &NORTH_WEST_PATTERNS,
            Self::North => &NORTH_PATTERNS,
            Self::NorthEast => &NORTH_EAST_PATTERNS,
        }
    }

    /// The other two orientations
    pub fn others(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |o| *o != self)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
