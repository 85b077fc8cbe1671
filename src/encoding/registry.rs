//! Variable allocation for `(cell, label)` propositions
//!
//! Ids are handed out lazily from 1 upward and never renumbered. The registry
//! is owned by a single run, so ids never leak between runs.

use crate::lattice::{Cell, Orientation, SectorSet};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Positive DIMACS variable id
pub type VarId = u32;

/// What a Boolean variable asserts about its cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// A tile of this orientation is centred at the cell
    Orientation(Orientation),
    /// The cell sees tile edges along exactly these sectors
    Border(SectorSet),
}

impl Label {
    /// The orientation, if this is an orientation label
    pub const fn orientation(self) -> Option<Orientation> {
        match self {
            Self::Orientation(orientation) => Some(orientation),
            Self::Border(_) => None,
        }
    }
}

impl From<Orientation> for Label {
    fn from(orientation: Orientation) -> Self {
        Self::Orientation(orientation)
    }
}

impl From<SectorSet> for Label {
    fn from(sectors: SectorSet) -> Self {
        Self::Border(sectors)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orientation(orientation) => fmt::Display::fmt(orientation, f),
            Self::Border(sectors) => fmt::Display::fmt(sectors, f),
        }
    }
}

/// Append-only bijection between `(cell, label)` pairs and variable ids
#[derive(Clone, Debug, Default)]
pub struct VariableRegistry {
    ids: HashMap<(Cell, Label), VarId>,
    entries: Vec<(Cell, Label)>,
}

impl VariableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `(cell, label)`, allocating the next one on first request
    ///
    /// Ids are not bounded here; callers check the total against
    /// [`MAX_VARIABLE`](crate::encoding::clause::MAX_VARIABLE) before emitting literals.
    pub fn id_of(&mut self, cell: Cell, label: impl Into<Label>) -> VarId {
        let key = (cell, label.into());
        let next = self.entries.len() as VarId + 1;
        match self.ids.entry(key) {
            Entry::Occupied(existing) => *existing.get(),
            Entry::Vacant(slot) => {
                slot.insert(next);
                self.entries.push(key);
                next
            }
        }
    }

    /// Id of `(cell, label)` if it has already been allocated
    pub fn get(&self, cell: Cell, label: impl Into<Label>) -> Option<VarId> {
        self.ids.get(&(cell, label.into())).copied()
    }

    /// The pair an id was allocated for
    pub fn entry(&self, id: VarId) -> Option<(Cell, Label)> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.entries.get(index).copied()
    }

    /// Reverse lookup restricted to orientation labels
    pub fn orientation_of(&self, id: VarId) -> Option<(Cell, Orientation)> {
        let (cell, label) = self.entry(id)?;
        label.orientation().map(|orientation| (cell, orientation))
    }

    /// Ids of every orientation variable, in allocation order
    pub fn orientation_ids(&self) -> Vec<VarId> {
        (1..)
            .zip(&self.entries)
            .filter(|(_, (_, label))| label.orientation().is_some())
            .map(|(id, _)| id)
            .collect()
    }

    /// Distinct border labels allocated at any cell, sorted
    pub fn border_labels(&self) -> Vec<SectorSet> {
        let mut labels: Vec<SectorSet> = self
            .entries
            .iter()
            .filter_map(|(_, label)| match label {
                Label::Border(sectors) => Some(*sectors),
                Label::Orientation(_) => None,
            })
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Largest id allocated so far, zero when empty
    pub const fn max_id(&self) -> VarId {
        self.entries.len() as VarId
    }

    /// Number of allocated variables
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been allocated yet
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
