//! The planner: destinations, the assignment grid and the store behind them.
//!
//! Every change goes through the same three steps:
//!
//! 1. **stage**: validate against the current in-memory state and build a
//!    [`Mutation`]. Invalid drafts and incompatible drops stop here and never
//!    reach the store.
//! 2. **persist**: hand the mutation to the injected [`PlannerRepository`],
//!    which answers with the [`Change`] it stored.
//! 3. **commit**: apply the change to the in-memory state.
//!
//! Because nothing is applied before the store confirms, a failed save leaves
//! the planner exactly as it was. The `async` methods (`assign`, `remove_destination`,
//! ...) run all three steps; an event-driven UI that cannot hold `&mut Planner`
//! across an await calls `stage_*`, persists on its own task, and `commit`s when
//! the answer arrives.

pub mod drag;
pub mod grid;
pub mod mutation;
pub mod store;

use crate::error::{PlannerError, PlannerResult};
use crate::model::assignment::{Assignment, CellKey};
use crate::model::destination::{Destination, DestinationDraft, DestinationId};
use crate::model::vacation::{check_compatible, is_compatible, VacationType};
use crate::repository::{PlannerRepository, Snapshot};
use grid::AssignmentGrid;
use log::{debug, warn};
use mutation::{Change, Mutation};
use store::PlaceStore;

pub struct Planner<R> {
    repo: R,
    places: PlaceStore,
    grid: AssignmentGrid,
}

impl<R: PlannerRepository> Planner<R> {
    /// An empty planner; call [`Planner::restore`] or use [`Planner::load`] to fill it.
    pub fn new(repo: R) -> Self {
        Planner {
            repo,
            places: PlaceStore::default(),
            grid: AssignmentGrid::new(),
        }
    }

    /// Builds a planner from the store's current contents.
    pub async fn load(repo: R) -> PlannerResult<Self> {
        let snapshot = repo.snapshot().await?;
        let mut planner = Planner::new(repo);
        planner.restore(snapshot);
        Ok(planner)
    }

    /// Replaces the in-memory state with `snapshot`.
    ///
    /// Assignments pointing at destinations that no longer exist are dropped.
    /// Assignments that became incompatible after a months edit are kept.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.places = PlaceStore::new(snapshot.destinations);
        self.grid = AssignmentGrid::new();
        for assignment in snapshot.assignments {
            let key = assignment.key();
            match self.places.get(&assignment.destination_id) {
                Some(destination) => {
                    if self.grid.assign(key, destination).is_err() {
                        warn!("keeping stale assignment of {} in {}", destination.name, key);
                        self.grid.insert_unchecked(key, assignment.destination_id);
                    }
                }
                None => warn!(
                    "dropping assignment in {} to unknown destination {}",
                    key, assignment.destination_id
                ),
            }
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn places(&self) -> &PlaceStore {
        &self.places
    }

    pub fn grid(&self) -> &AssignmentGrid {
        &self.grid
    }

    pub fn destinations(&self) -> &[Destination] {
        self.places.list()
    }

    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.places.get(id)
    }

    /// The destination planned for a cell, resolved against the place store.
    pub fn destination_at(&self, key: CellKey) -> Option<&Destination> {
        self.grid.get(key).and_then(|id| self.places.get(id))
    }

    /// Whether dropping `id` on a cell of `vacation_type` would be accepted.
    pub fn accepts_drop(&self, id: &DestinationId, vacation_type: VacationType) -> bool {
        self.places
            .get(id)
            .is_some_and(|destination| is_compatible(destination, vacation_type))
    }

    pub fn stage_add(&self, draft: &DestinationDraft) -> PlannerResult<Mutation> {
        Ok(Mutation::CreateDestination(draft.validate()?))
    }

    pub fn stage_update(&self, id: &DestinationId, draft: &DestinationDraft) -> PlannerResult<Mutation> {
        let draft = draft.validate()?;
        self.require(id)?;
        Ok(Mutation::UpdateDestination(id.clone(), draft))
    }

    pub fn stage_remove(&self, id: &DestinationId) -> PlannerResult<Mutation> {
        self.require(id)?;
        Ok(Mutation::DeleteDestination(id.clone()))
    }

    pub fn stage_assign(&self, key: CellKey, id: &DestinationId) -> PlannerResult<Mutation> {
        check_compatible(self.require(id)?, key.vacation_type)?;
        Ok(Mutation::Assign(Assignment::new(key, id.clone())))
    }

    /// `None` when the cell is already empty: there is nothing to persist.
    pub fn stage_unassign(&self, key: CellKey) -> Option<Mutation> {
        self.grid.get(key).map(|_| Mutation::Unassign(key))
    }

    /// Applies a change the store has confirmed.
    pub fn commit(&mut self, change: Change) -> PlannerResult<()> {
        debug!("commit {:?}", change);
        match change {
            Change::DestinationSaved(destination) => {
                if self.places.contains(&destination.id) {
                    self.places.update(&destination.id, destination.draft())?;
                } else {
                    self.places.add(destination);
                }
            }
            Change::DestinationRemoved(id) => {
                self.places.remove(&id);
                let cleared = self.grid.on_destination_deleted(&id);
                if cleared > 0 {
                    debug!("removed {} from {} planned cells", id, cleared);
                }
            }
            // The store already accepted the cell; a months edit committed in
            // between must not undo it here.
            Change::Assigned(assignment) => {
                self.require(&assignment.destination_id)?;
                self.grid.insert_unchecked(assignment.key(), assignment.destination_id);
            }
            Change::Unassigned(key) => {
                self.grid.unassign(key);
            }
        }
        Ok(())
    }

    pub async fn add_destination(&mut self, draft: &DestinationDraft) -> PlannerResult<Destination> {
        let mutation = self.stage_add(draft)?;
        match self.run(mutation).await? {
            Change::DestinationSaved(destination) => Ok(destination),
            other => Err(unexpected(other)),
        }
    }

    pub async fn update_destination(
        &mut self,
        id: &DestinationId,
        draft: &DestinationDraft,
    ) -> PlannerResult<Destination> {
        let mutation = self.stage_update(id, draft)?;
        match self.run(mutation).await? {
            Change::DestinationSaved(destination) => Ok(destination),
            other => Err(unexpected(other)),
        }
    }

    /// Deletes a destination and clears every cell it was planned in.
    pub async fn remove_destination(&mut self, id: &DestinationId) -> PlannerResult<()> {
        let mutation = self.stage_remove(id)?;
        self.run(mutation).await.map(|_| ())
    }

    /// Plans `id` into the cell, replacing any earlier choice.
    pub async fn assign(&mut self, key: CellKey, id: &DestinationId) -> PlannerResult<()> {
        let mutation = self.stage_assign(key, id)?;
        self.run(mutation).await.map(|_| ())
    }

    pub async fn unassign(&mut self, key: CellKey) -> PlannerResult<()> {
        match self.stage_unassign(key) {
            Some(mutation) => self.run(mutation).await.map(|_| ()),
            None => Ok(()),
        }
    }

    async fn run(&mut self, mutation: Mutation) -> PlannerResult<Change> {
        let change = self.repo.persist(mutation).await?;
        self.commit(change.clone())?;
        Ok(change)
    }

    fn require(&self, id: &DestinationId) -> PlannerResult<&Destination> {
        self.places
            .get(id)
            .ok_or_else(|| PlannerError::UnknownDestination(id.clone()))
    }
}

fn unexpected(change: Change) -> PlannerError {
    PlannerError::persistence(format!("store answered with unexpected change {:?}", change))
}
