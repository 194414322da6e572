use common::error::{PlannerError, ValidationError};
use common::model::assignment::{Assignment, CellKey};
use common::model::destination::{Destination, DestinationDraft, DestinationId};
use common::model::month::Month;
use common::model::vacation::VacationType;
use common::planner::drag::{DragSession, PointerKind};
use common::planner::Planner;
use common::repository::{MemoryRepository, PlannerRepository, Snapshot};
use futures::executor::block_on;

fn egypt() -> DestinationDraft {
    DestinationDraft::new("Egypt", 9, [Month::March, Month::October])
}

fn dubai() -> DestinationDraft {
    DestinationDraft::new("Dubai", 5, [Month::March])
}

async fn planner_with(drafts: &[DestinationDraft]) -> (Planner<MemoryRepository>, Vec<Destination>) {
    let mut planner = Planner::load(MemoryRepository::new()).await.unwrap();
    let mut created = Vec::new();
    for draft in drafts {
        created.push(planner.add_destination(draft).await.unwrap());
    }
    (planner, created)
}

#[test]
fn egypt_is_accepted_for_annual_break_and_rejected_for_summer() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt()]).await;
        let egypt = &created[0];

        let annual = CellKey::new(2027, VacationType::AnnualBreak);
        planner.assign(annual, &egypt.id).await.unwrap();
        assert_eq!(planner.destination_at(annual), Some(egypt));

        let summer = CellKey::new(2027, VacationType::SummerVacation);
        let err = planner.assign(summer, &egypt.id).await.unwrap_err();
        assert!(matches!(err, PlannerError::IncompatibleAssignment { .. }));
        assert_eq!(planner.destination_at(summer), None);

        // Nothing reached the store for the rejected drop.
        let stored = planner.repository().list_assignments().await.unwrap();
        assert_eq!(stored, vec![Assignment::new(annual, egypt.id.clone())]);
    });
}

#[test]
fn later_assignment_to_same_cell_wins() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt(), dubai()]).await;
        let cell = CellKey::new(2029, VacationType::AnnualBreak);

        planner.assign(cell, &created[0].id).await.unwrap();
        planner.assign(cell, &created[1].id).await.unwrap();

        assert_eq!(planner.grid().len(), 1);
        assert_eq!(planner.destination_at(cell).map(|d| d.name.as_str()), Some("Dubai"));
    });
}

#[test]
fn removing_destination_clears_every_cell_it_was_in() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt(), dubai()]).await;
        let egypt_id = created[0].id.clone();
        planner.assign(CellKey::new(2026, VacationType::AnnualBreak), &egypt_id).await.unwrap();
        planner.assign(CellKey::new(2026, VacationType::Puja), &egypt_id).await.unwrap();
        planner.assign(CellKey::new(2027, VacationType::AnnualBreak), &created[1].id).await.unwrap();

        planner.remove_destination(&egypt_id).await.unwrap();

        assert!(planner.destination(&egypt_id).is_none());
        assert!(planner.grid().iter().all(|(_, id)| id != &egypt_id));
        assert_eq!(planner.grid().len(), 1);

        let reloaded = Planner::load(MemoryRepository::with_snapshot(
            planner.repository().snapshot().await.unwrap(),
        ))
        .await
        .unwrap();
        assert_eq!(reloaded.grid(), planner.grid());
    });
}

#[test]
fn unassign_is_idempotent() {
    block_on(async {
        let (mut planner, created) = planner_with(&[dubai()]).await;
        let cell = CellKey::new(2031, VacationType::AnnualBreak);
        planner.assign(cell, &created[0].id).await.unwrap();

        planner.unassign(cell).await.unwrap();
        let after_first = planner.grid().clone();
        planner.unassign(cell).await.unwrap();
        assert_eq!(planner.grid(), &after_first);
        assert!(planner.grid().is_empty());
    });
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    block_on(async {
        let (mut planner, _) = planner_with(&[]).await;
        let err = planner
            .add_destination(&DestinationDraft::new("", 3, [Month::May]))
            .await
            .unwrap_err();
        assert_eq!(err, PlannerError::Validation(ValidationError::EmptyName));

        let err = planner
            .add_destination(&DestinationDraft::new("Kedarnath", 9, []))
            .await
            .unwrap_err();
        assert_eq!(err, PlannerError::Validation(ValidationError::NoMonths));

        assert!(planner.destinations().is_empty());
        assert!(planner.repository().list_destinations().await.unwrap().is_empty());
    });
}

#[test]
fn failed_save_leaves_planner_untouched() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt()]).await;
        let cell = CellKey::new(2028, VacationType::Puja);
        planner.assign(cell, &created[0].id).await.unwrap();
        let places_before = planner.places().clone();
        let grid_before = planner.grid().clone();

        planner.repository().set_failing(true);

        let err = planner.remove_destination(&created[0].id).await.unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));
        let err = planner.add_destination(&dubai()).await.unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));
        let err = planner
            .update_destination(&created[0].id, &DestinationDraft::new("Cairo", 7, [Month::October]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));

        assert_eq!(planner.places(), &places_before);
        assert_eq!(planner.grid(), &grid_before);
    });
}

#[test]
fn editing_months_keeps_existing_assignments() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt()]).await;
        let cell = CellKey::new(2026, VacationType::Puja);
        planner.assign(cell, &created[0].id).await.unwrap();

        let updated = planner
            .update_destination(&created[0].id, &DestinationDraft::new("Egypt", 9, [Month::March]))
            .await
            .unwrap();
        assert_eq!(updated.months.len(), 1);
        assert_eq!(planner.destination_at(cell), Some(&updated));
    });
}

#[test]
fn load_drops_assignments_to_unknown_destinations() {
    block_on(async {
        let known = egypt().into_destination(DestinationId::from("2"));
        let snapshot = Snapshot {
            destinations: vec![known.clone()],
            assignments: vec![
                Assignment::new(CellKey::new(2026, VacationType::AnnualBreak), known.id.clone()),
                Assignment::new(CellKey::new(2026, VacationType::Christmas), "ghost".into()),
            ],
        };
        let planner = Planner::load(MemoryRepository::with_snapshot(snapshot)).await.unwrap();
        assert_eq!(planner.grid().len(), 1);
        assert_eq!(
            planner.destination_at(CellKey::new(2026, VacationType::AnnualBreak)),
            Some(&known)
        );
    });
}

#[test]
fn staged_drop_flow_commits_after_persist() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt()]).await;
        let mut session = DragSession::new();
        let cell = CellKey::new(2030, VacationType::AnnualBreak);

        session.start(created[0].id.clone(), PointerKind::Touch, 10_000);
        assert!(session.hold_elapsed(10_600));
        let dragged = session.active().cloned().unwrap();
        assert!(planner.accepts_drop(&dragged, VacationType::AnnualBreak));
        assert!(!planner.accepts_drop(&dragged, VacationType::Christmas));

        let dropped = session.drop_destination().unwrap();
        let mutation = planner.stage_assign(cell, &dropped).unwrap();
        let change = planner.repository().persist(mutation).await.unwrap();
        assert_eq!(planner.destination_at(cell), None);

        planner.commit(change).unwrap();
        assert_eq!(planner.destination_at(cell), Some(&created[0]));
    });
}

#[test]
fn quick_tap_never_assigns() {
    block_on(async {
        let (planner, created) = planner_with(&[egypt()]).await;
        let mut session = DragSession::new();

        session.start(created[0].id.clone(), PointerKind::Touch, 0);
        session.release(120);
        assert_eq!(session.drop_destination(), None);
        assert!(planner.grid().is_empty());
    });
}

#[test]
fn confirmed_assignment_survives_a_months_edit_committed_first() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt()]).await;
        let egypt_id = created[0].id.clone();
        let cell = CellKey::new(2027, VacationType::Puja);

        let assigned = planner
            .repository()
            .persist(planner.stage_assign(cell, &egypt_id).unwrap())
            .await
            .unwrap();
        planner
            .update_destination(&egypt_id, &DestinationDraft::new("Egypt", 9, [Month::March]))
            .await
            .unwrap();

        planner.commit(assigned).unwrap();

        assert_eq!(planner.grid().get(cell), Some(&egypt_id));
        assert_eq!(
            planner.repository().list_assignments().await.unwrap(),
            planner.grid().assignments()
        );
    });
}

#[test]
fn failed_assign_and_unassign_leave_grid_untouched() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt(), dubai()]).await;
        let filled = CellKey::new(2026, VacationType::AnnualBreak);
        let empty = CellKey::new(2027, VacationType::AnnualBreak);
        planner.assign(filled, &created[0].id).await.unwrap();
        let grid_before = planner.grid().clone();

        planner.repository().set_failing(true);

        let err = planner.assign(empty, &created[1].id).await.unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));
        let err = planner.assign(filled, &created[1].id).await.unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));
        let err = planner.unassign(filled).await.unwrap_err();
        assert!(matches!(err, PlannerError::Persistence(_)));

        assert_eq!(planner.grid(), &grid_before);
        assert_eq!(planner.destination_at(filled), Some(&created[0]));
    });
}

#[test]
fn load_keeps_assignments_made_stale_by_a_months_edit() {
    block_on(async {
        // Nepal only travels in October now, but was planned for Christmas earlier.
        let nepal = DestinationDraft::new("Nepal", 6, [Month::October])
            .into_destination(DestinationId::from("11"));
        let christmas = CellKey::new(2028, VacationType::Christmas);
        let snapshot = Snapshot {
            destinations: vec![nepal.clone()],
            assignments: vec![Assignment::new(christmas, nepal.id.clone())],
        };

        let planner = Planner::load(MemoryRepository::with_snapshot(snapshot)).await.unwrap();

        assert_eq!(planner.destination_at(christmas), Some(&nepal));
        assert!(!planner.accepts_drop(&nepal.id, VacationType::Christmas));
    });
}

#[test]
fn editing_a_destination_keeps_its_place_in_the_list() {
    block_on(async {
        let (mut planner, created) = planner_with(&[egypt(), dubai()]).await;

        planner
            .update_destination(&created[0].id, &DestinationDraft::new("Cairo", 7, [Month::October]))
            .await
            .unwrap();

        let names: Vec<&str> = planner.destinations().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Cairo", "Dubai"]);
        assert_eq!(planner.destinations()[0].id, created[0].id);
    });
}
