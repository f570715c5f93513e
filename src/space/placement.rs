//! Hospital placements.

use super::coord::Coord;
use std::collections::BTreeSet;

/// A set of hospital cells.
///
/// Placements are values: a move clones the set and swaps one cell, so two
/// candidate placements never share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    cells: BTreeSet<Coord>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells.contains(cell)
    }

    /// Adds a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: Coord) -> bool {
        self.cells.insert(cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.cells.iter()
    }

    /// Returns a copy with `from` replaced by `to`.
    pub fn swapped(&self, from: Coord, to: Coord) -> Placement {
        let mut cells = self.cells.clone();
        cells.remove(&from);
        cells.insert(to);
        Placement { cells }
    }

    pub fn to_vec(&self) -> Vec<Coord> {
        self.cells.iter().copied().collect()
    }
}

impl FromIterator<Coord> for Placement {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Placement {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Coord;
    type IntoIter = std::collections::btree_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
