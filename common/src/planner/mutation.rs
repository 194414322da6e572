use crate::model::assignment::{Assignment, CellKey};
use crate::model::destination::{Destination, DestinationDraft, DestinationId};

/// A validated request to change the planner, ready to be sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateDestination(DestinationDraft),
    UpdateDestination(DestinationId, DestinationDraft),
    DeleteDestination(DestinationId),
    Assign(Assignment),
    Unassign(CellKey),
}

/// What the store actually did, to be committed to the in-memory planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Created or updated; the store's copy is authoritative.
    DestinationSaved(Destination),
    DestinationRemoved(DestinationId),
    Assigned(Assignment),
    Unassigned(CellKey),
}
