use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::assignment::Assignment;
use common::repository::PlannerRepository;
use log::info;

pub async fn process(
    store: web::Data<SqliteStore>,
    payload: web::Json<Assignment>,
) -> impl Responder {
    let assignment = payload.into_inner();
    match store.upsert_assignment(&assignment).await {
        Ok(()) => {
            info!(
                "planned {} for {}",
                assignment.destination_id,
                assignment.key()
            );
            HttpResponse::Ok().json(assignment)
        }
        Err(e) => error_response(&e),
    }
}
