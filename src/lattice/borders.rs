//! Sector sets around a vertex and border-label enumeration
//!
//! Each vertex is surrounded by six triangular sectors numbered `1..=6`. The
//! border encoding labels a vertex with the subset of sectors that lie on a
//! tile edge, written canonically as `b` followed by the sorted sector digits.

use itertools::Itertools;
use std::fmt;

/// Number of sectors around a lattice vertex
pub const SECTOR_COUNT: u8 = 6;

/// Subset of the six sectors around a vertex, stored as a bitmask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorSet(u8);

impl SectorSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);
    /// All six sectors
    pub const ALL: Self = Self(0b11_1111);

    /// Build a set from sector numbers in `1..=6`
    ///
    /// Out-of-range sectors are ignored.
    pub const fn of(mut sectors: &[u8]) -> Self {
        let mut bits = 0;
        while let [first, rest @ ..] = sectors {
            if matches!(*first, 1..=SECTOR_COUNT) {
                bits |= 1 << (*first - 1);
            }
            sectors = rest;
        }
        Self(bits)
    }

    /// Whether `sector` is a member
    pub const fn contains(self, sector: u8) -> bool {
        matches!(sector, 1..=SECTOR_COUNT) && self.0 & (1 << (sector - 1)) != 0
    }

    /// Set with `sector` added
    pub const fn with(self, sector: u8) -> Self {
        if matches!(sector, 1..=SECTOR_COUNT) {
            Self(self.0 | (1 << (sector - 1)))
        } else {
            self
        }
    }

    /// Union of two sets
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Sectors in `self` but not in `other`
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether the two sets share a sector
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every sector of `self` is in `other`
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of sectors in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sectors in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=SECTOR_COUNT).filter(move |&sector| self.contains(sector))
    }
}

impl FromIterator<u8> for SectorSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for SectorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("b")?;
        for sector in self.iter() {
            write!(f, "{sector}")?;
        }
        Ok(())
    }
}

/// Sector diametrically opposite `sector` across the vertex
pub const fn opposite(sector: u8) -> u8 {
    (sector + 2) % SECTOR_COUNT + 1
}

/// Enumerate every border label consistent with a partially known vertex
///
/// `border` holds sectors already known to lie on a tile edge and `inside`
/// sectors already covered by the tile. A rhombus corner needs at least two
/// edge sectors, so completions add between `2 - |inside|` and all of the
/// unclaimed sectors to `border`.
///
/// When nothing inside is known the vertex is an acute corner, and the sector
/// opposite each fixed edge sector is forced onto the edge as well; those
/// single-sector extensions are emitted first.
///
/// Labels are unique and returned in generation order. No label contains a
/// sector of `inside`.
pub fn enumerate_borders(border: SectorSet, inside: SectorSet) -> Vec<SectorSet> {
    let minimum = 2_usize.saturating_sub(inside.len());

    let acute = inside
        .is_empty()
        .then(|| border.iter().map(move |sector| border.with(opposite(sector))))
        .into_iter()
        .flatten();

    let available: Vec<u8> = SectorSet::ALL.difference(border).difference(inside).iter().collect();
    let completions = (minimum..=available.len()).flat_map(|size| {
        available
            .iter()
            .copied()
            .combinations(size)
            .map(move |extra| border.union(extra.into_iter().collect()))
    });

    acute
        .chain(completions)
        .filter(|label| !label.intersects(inside))
        .unique()
        .collect()
}
