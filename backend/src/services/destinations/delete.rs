use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::destination::DestinationId;
use common::repository::PlannerRepository;
use log::info;

/// Actix web handler for `DELETE /api/destinations/{id}`.
///
/// The destination and all of its grid assignments are removed in one
/// transaction, so the grid never points at a missing destination.
pub async fn process(store: web::Data<SqliteStore>, id: web::Path<String>) -> impl Responder {
    let id = DestinationId::from(id.into_inner());
    match store.delete_destination(&id).await {
        Ok(()) => {
            info!("deleted destination {}", id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => error_response(&e),
    }
}
