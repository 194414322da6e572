//! The year × vacation-type planning grid.
//!
//! The grid is sparse: only filled cells are stored, each pointing at a
//! destination id. Compatibility is enforced when a cell is filled; editing a
//! destination's months afterwards does not revisit existing cells.

use crate::error::PlannerResult;
use crate::model::assignment::{Assignment, CellKey};
use crate::model::destination::{Destination, DestinationId};
use crate::model::vacation::check_compatible;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentGrid {
    cells: BTreeMap<CellKey, DestinationId>,
}

impl AssignmentGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `destination` into the cell, replacing whatever was there.
    ///
    /// An incompatible destination is rejected and the grid is left untouched.
    pub fn assign(&mut self, key: CellKey, destination: &Destination) -> PlannerResult<()> {
        check_compatible(destination, key.vacation_type)?;
        self.cells.insert(key, destination.id.clone());
        Ok(())
    }

    /// Restores a cell loaded from the store without re-checking compatibility.
    pub(crate) fn insert_unchecked(&mut self, key: CellKey, id: DestinationId) {
        self.cells.insert(key, id);
    }

    /// Empties the cell, returning the destination that was in it.
    pub fn unassign(&mut self, key: CellKey) -> Option<DestinationId> {
        self.cells.remove(&key)
    }

    /// Clears every cell holding `id`. Returns how many cells were cleared.
    pub fn on_destination_deleted(&mut self, id: &DestinationId) -> usize {
        let before = self.cells.len();
        self.cells.retain(|_, assigned| assigned != id);
        before - self.cells.len()
    }

    pub fn get(&self, key: CellKey) -> Option<&DestinationId> {
        self.cells.get(&key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &DestinationId)> {
        self.cells.iter()
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.cells
            .iter()
            .map(|(key, id)| Assignment::new(*key, id.clone()))
            .collect()
    }
}
