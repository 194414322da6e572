use super::{PlannerRepository, Snapshot};
use crate::error::{PlannerError, PlannerResult};
use crate::model::assignment::{Assignment, CellKey};
use crate::model::destination::{Destination, DestinationDraft, DestinationId};
use crate::model::vacation::check_compatible;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct MemoryState {
    destinations: Vec<Destination>,
    assignments: BTreeMap<CellKey, DestinationId>,
    next_id: u64,
    failing: bool,
}

/// A store kept entirely in memory.
///
/// Behaves like the SQLite store of the backend (validation, cascading deletes,
/// last-write-wins upserts) and can be switched into a failing mode to exercise
/// the planner's error paths.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let assignments = snapshot
            .assignments
            .into_iter()
            .map(|a| (a.key(), a.destination_id))
            .collect();
        MemoryRepository {
            state: Mutex::new(MemoryState {
                next_id: snapshot.destinations.len() as u64,
                destinations: snapshot.destinations,
                assignments,
                failing: false,
            }),
        }
    }

    /// While failing, every call returns `PlannerError::Persistence` and stores nothing.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.failing = failing;
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> PlannerResult<T>) -> PlannerResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| PlannerError::persistence("memory store poisoned"))?;
        if state.failing {
            return Err(PlannerError::persistence("memory store unavailable"));
        }
        f(&mut state)
    }
}

#[async_trait(?Send)]
impl PlannerRepository for MemoryRepository {
    async fn list_destinations(&self) -> PlannerResult<Vec<Destination>> {
        self.with_state(|state| Ok(state.destinations.clone()))
    }

    async fn create_destination(&self, draft: &DestinationDraft) -> PlannerResult<Destination> {
        let draft = draft.validate()?;
        self.with_state(|state| {
            state.next_id += 1;
            let mut id = DestinationId::new(format!("mem-{}", state.next_id));
            while state.destinations.iter().any(|d| d.id == id) {
                state.next_id += 1;
                id = DestinationId::new(format!("mem-{}", state.next_id));
            }
            let destination = draft.into_destination(id);
            state.destinations.push(destination.clone());
            Ok(destination)
        })
    }

    async fn update_destination(
        &self,
        id: &DestinationId,
        draft: &DestinationDraft,
    ) -> PlannerResult<Destination> {
        let draft = draft.validate()?;
        self.with_state(|state| {
            let existing = state
                .destinations
                .iter_mut()
                .find(|d| &d.id == id)
                .ok_or_else(|| PlannerError::UnknownDestination(id.clone()))?;
            *existing = draft.into_destination(id.clone());
            Ok(existing.clone())
        })
    }

    async fn delete_destination(&self, id: &DestinationId) -> PlannerResult<()> {
        self.with_state(|state| {
            state.destinations.retain(|d| &d.id != id);
            state.assignments.retain(|_, assigned| assigned != id);
            Ok(())
        })
    }

    async fn list_assignments(&self) -> PlannerResult<Vec<Assignment>> {
        self.with_state(|state| {
            Ok(state
                .assignments
                .iter()
                .map(|(key, id)| Assignment::new(*key, id.clone()))
                .collect())
        })
    }

    async fn upsert_assignment(&self, assignment: &Assignment) -> PlannerResult<()> {
        self.with_state(|state| {
            let destination = state
                .destinations
                .iter()
                .find(|d| d.id == assignment.destination_id)
                .ok_or_else(|| PlannerError::UnknownDestination(assignment.destination_id.clone()))?;
            check_compatible(destination, assignment.vacation_type)?;
            state
                .assignments
                .insert(assignment.key(), assignment.destination_id.clone());
            Ok(())
        })
    }

    async fn delete_assignment(&self, key: CellKey) -> PlannerResult<()> {
        self.with_state(|state| {
            state.assignments.remove(&key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::month::Month;
    use crate::model::vacation::VacationType;
    use futures::executor::block_on;

    #[test]
    fn delete_cascades_to_assignments() {
        block_on(async {
            let repo = MemoryRepository::new();
            let egypt = repo
                .create_destination(&DestinationDraft::new("Egypt", 9, [Month::March, Month::October]))
                .await
                .unwrap();
            repo.upsert_assignment(&Assignment::new(
                CellKey::new(2027, VacationType::AnnualBreak),
                egypt.id.clone(),
            ))
            .await
            .unwrap();

            repo.delete_destination(&egypt.id).await.unwrap();
            assert!(repo.list_assignments().await.unwrap().is_empty());
        });
    }

    #[test]
    fn failing_store_rejects_everything() {
        block_on(async {
            let repo = MemoryRepository::new();
            repo.set_failing(true);
            let err = repo
                .create_destination(&DestinationDraft::new("Nepal", 6, [Month::October]))
                .await
                .unwrap_err();
            assert!(matches!(err, PlannerError::Persistence(_)));

            repo.set_failing(false);
            assert!(repo.list_destinations().await.unwrap().is_empty());
        });
    }

    #[test]
    fn rejects_assignment_of_unknown_destination() {
        block_on(async {
            let repo = MemoryRepository::new();
            let err = repo
                .upsert_assignment(&Assignment::new(
                    CellKey::new(2026, VacationType::Puja),
                    DestinationId::from("ghost"),
                ))
                .await
                .unwrap_err();
            assert_eq!(err, PlannerError::UnknownDestination("ghost".into()));
        });
    }
}
