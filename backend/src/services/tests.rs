use crate::db::seed::seed_if_empty;
use crate::db::store::SqliteStore;
use crate::db::Database;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::model::assignment::{Assignment, CellKey};
use common::model::destination::{Destination, DestinationDraft};
use common::model::month::Month;
use common::model::vacation::VacationType;
use tempfile::TempDir;

fn temp_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::new(dir.path().join("planner.sqlite"));
    database.init().unwrap();
    (dir, database)
}

macro_rules! planner_app {
    ($database:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(SqliteStore::new($database.clone())))
                .configure(super::configure),
        )
        .await
    };
}

fn egypt() -> DestinationDraft {
    DestinationDraft::new("Egypt", 9, [Month::March, Month::October])
}

#[actix_web::test]
async fn create_then_list_destinations() {
    let (_dir, database) = temp_database();
    let app = planner_app!(database);

    let req = test::TestRequest::post()
        .uri("/api/destinations")
        .set_json(DestinationDraft::new("  Nepal ", 6, [Month::October]))
        .to_request();
    let created: Destination = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.name, "Nepal");
    assert!(!created.id.as_str().is_empty());

    let req = test::TestRequest::get().uri("/api/destinations").to_request();
    let listed: Vec<Destination> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![created]);
}

#[actix_web::test]
async fn create_answers_201_and_rejects_invalid_drafts() {
    let (_dir, database) = temp_database();
    let app = planner_app!(database);

    let req = test::TestRequest::post()
        .uri("/api/destinations")
        .set_json(egypt())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    for draft in [
        DestinationDraft::new(" ", 9, [Month::March]),
        DestinationDraft::new("Iceland", 9, []),
        DestinationDraft::new("Iceland", 0, [Month::September]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/destinations")
            .set_json(draft)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn update_unknown_destination_is_404() {
    let (_dir, database) = temp_database();
    let app = planner_app!(database);

    let req = test::TestRequest::put()
        .uri("/api/destinations/nope")
        .set_json(egypt())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn assignment_respects_compatibility() {
    let (_dir, database) = temp_database();
    let app = planner_app!(database);

    let req = test::TestRequest::post()
        .uri("/api/destinations")
        .set_json(egypt())
        .to_request();
    let egypt: Destination = test::call_and_read_body_json(&app, req).await;

    let annual = Assignment::new(CellKey::new(2027, VacationType::AnnualBreak), egypt.id.clone());
    let req = test::TestRequest::put()
        .uri("/api/assignments")
        .set_json(&annual)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let summer = Assignment::new(CellKey::new(2027, VacationType::SummerVacation), egypt.id.clone());
    let req = test::TestRequest::put()
        .uri("/api/assignments")
        .set_json(&summer)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/assignments").to_request();
    let stored: Vec<Assignment> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, vec![annual]);
}

#[actix_web::test]
async fn deleting_destination_cascades_to_assignments() {
    let (_dir, database) = temp_database();
    seed_if_empty(&database).unwrap();
    let app = planner_app!(database);

    // Seeded "2" is Egypt, "8" is Dubai.
    for assignment in [
        Assignment::new(CellKey::new(2026, VacationType::AnnualBreak), "2".into()),
        Assignment::new(CellKey::new(2026, VacationType::Puja), "2".into()),
        Assignment::new(CellKey::new(2027, VacationType::AnnualBreak), "8".into()),
    ] {
        let req = test::TestRequest::put()
            .uri("/api/assignments")
            .set_json(&assignment)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete().uri("/api/destinations/2").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/assignments").to_request();
    let stored: Vec<Assignment> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        stored,
        vec![Assignment::new(CellKey::new(2027, VacationType::AnnualBreak), "8".into())]
    );
}

#[actix_web::test]
async fn last_write_wins_and_unassign_is_idempotent() {
    let (_dir, database) = temp_database();
    seed_if_empty(&database).unwrap();
    let app = planner_app!(database);
    let cell = CellKey::new(2030, VacationType::Christmas);

    // Varanasi ("3") then Vietnam ("12"), both travel in December.
    for id in ["3", "12"] {
        let req = test::TestRequest::put()
            .uri("/api/assignments")
            .set_json(Assignment::new(cell, id.into()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    let req = test::TestRequest::get().uri("/api/assignments").to_request();
    let stored: Vec<Assignment> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, vec![Assignment::new(cell, "12".into())]);

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/api/assignments/2030/christmas")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    }
    let req = test::TestRequest::get().uri("/api/assignments").to_request();
    let stored: Vec<Assignment> = test::call_and_read_body_json(&app, req).await;
    assert!(stored.is_empty());

    let req = test::TestRequest::delete()
        .uri("/api/assignments/2030/easter")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn assigning_unknown_destination_is_404() {
    let (_dir, database) = temp_database();
    let app = planner_app!(database);

    let req = test::TestRequest::put()
        .uri("/api/assignments")
        .set_json(Assignment::new(
            CellKey::new(2026, VacationType::Puja),
            "ghost".into(),
        ))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn seeding_happens_only_once() {
    let (_dir, database) = temp_database();
    assert_eq!(seed_if_empty(&database).unwrap(), 14);
    assert_eq!(seed_if_empty(&database).unwrap(), 0);
}
