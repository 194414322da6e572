//! The persistence interface handed to the [`Planner`](crate::planner::Planner).
//!
//! The planner never talks to a database or the network itself. Whatever stores
//! the data (SQLite in the backend, the REST API from the browser, or
//! [`MemoryRepository`] in tests) implements [`PlannerRepository`] and is
//! injected when the planner is built.
//!
//! Futures are `?Send`: the browser implementation holds JS values across
//! awaits, and actix runs handlers on a single-threaded executor per worker.

mod memory;

pub use memory::MemoryRepository;

use crate::error::PlannerResult;
use crate::model::assignment::{Assignment, CellKey};
use crate::model::destination::{Destination, DestinationDraft, DestinationId};
use crate::planner::mutation::{Change, Mutation};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything the planner needs on start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub destinations: Vec<Destination>,
    pub assignments: Vec<Assignment>,
}

/// Remote CRUD surface for destinations and grid assignments.
///
/// Every call either succeeds or fails as a whole. Conflicting writes to the
/// same cell resolve as last-write-wins inside the store.
#[async_trait(?Send)]
pub trait PlannerRepository {
    async fn list_destinations(&self) -> PlannerResult<Vec<Destination>>;

    /// Stores a new destination and returns it with the id the store assigned.
    async fn create_destination(&self, draft: &DestinationDraft) -> PlannerResult<Destination>;

    async fn update_destination(
        &self,
        id: &DestinationId,
        draft: &DestinationDraft,
    ) -> PlannerResult<Destination>;

    /// Deletes the destination together with every assignment that references it.
    async fn delete_destination(&self, id: &DestinationId) -> PlannerResult<()>;

    async fn list_assignments(&self) -> PlannerResult<Vec<Assignment>>;

    async fn upsert_assignment(&self, assignment: &Assignment) -> PlannerResult<()>;

    async fn delete_assignment(&self, key: CellKey) -> PlannerResult<()>;

    async fn snapshot(&self) -> PlannerResult<Snapshot> {
        let destinations = self.list_destinations().await?;
        let assignments = self.list_assignments().await?;
        Ok(Snapshot {
            destinations,
            assignments,
        })
    }

    /// Sends a staged mutation to the store and reports what was stored.
    async fn persist(&self, mutation: Mutation) -> PlannerResult<Change> {
        match mutation {
            Mutation::CreateDestination(draft) => self
                .create_destination(&draft)
                .await
                .map(Change::DestinationSaved),
            Mutation::UpdateDestination(id, draft) => self
                .update_destination(&id, &draft)
                .await
                .map(Change::DestinationSaved),
            Mutation::DeleteDestination(id) => {
                self.delete_destination(&id).await?;
                Ok(Change::DestinationRemoved(id))
            }
            Mutation::Assign(assignment) => {
                self.upsert_assignment(&assignment).await?;
                Ok(Change::Assigned(assignment))
            }
            Mutation::Unassign(key) => {
                self.delete_assignment(key).await?;
                Ok(Change::Unassigned(key))
            }
        }
    }
}
