use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::destination::DestinationDraft;
use common::repository::PlannerRepository;
use log::info;

/// Actix web handler for `POST /api/destinations`.
///
/// # Returns
/// - `201 Created` with the stored `Destination` (including its new id).
/// - `400 Bad Request` if the name is blank, no month is selected or the trip
///   length is outside 1..=30 days.
/// - `503 Service Unavailable` if the database cannot be written.
pub async fn process(
    store: web::Data<SqliteStore>,
    payload: web::Json<DestinationDraft>,
) -> impl Responder {
    match store.create_destination(&payload).await {
        Ok(destination) => {
            info!("created destination {} ({})", destination.name, destination.id);
            HttpResponse::Created().json(destination)
        }
        Err(e) => error_response(&e),
    }
}
