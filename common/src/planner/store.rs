use crate::error::{PlannerError, PlannerResult};
use crate::model::destination::{Destination, DestinationDraft, DestinationId};

/// The catalog of destinations, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceStore {
    destinations: Vec<Destination>,
}

impl PlaceStore {
    pub fn new(destinations: Vec<Destination>) -> Self {
        PlaceStore { destinations }
    }

    pub fn list(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn get(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DestinationId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a destination, or replaces the one with the same id in place.
    pub fn add(&mut self, destination: Destination) {
        match self.destinations.iter_mut().find(|d| d.id == destination.id) {
            Some(existing) => *existing = destination,
            None => self.destinations.push(destination),
        }
    }

    /// Overwrites the editable fields of an existing destination.
    pub fn update(&mut self, id: &DestinationId, draft: DestinationDraft) -> PlannerResult<&Destination> {
        let destination = self
            .destinations
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| PlannerError::UnknownDestination(id.clone()))?;
        destination.name = draft.name;
        destination.days = draft.days;
        destination.months = draft.months;
        Ok(destination)
    }

    pub fn remove(&mut self, id: &DestinationId) -> Option<Destination> {
        let index = self.destinations.iter().position(|d| &d.id == id)?;
        Some(self.destinations.remove(index))
    }
}
