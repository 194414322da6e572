use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::destination::{DestinationDraft, DestinationId};
use common::repository::PlannerRepository;
use log::info;

pub async fn process(
    store: web::Data<SqliteStore>,
    id: web::Path<String>,
    payload: web::Json<DestinationDraft>,
) -> impl Responder {
    let id = DestinationId::from(id.into_inner());
    match store.update_destination(&id, &payload).await {
        Ok(destination) => {
            info!("updated destination {} ({})", destination.name, destination.id);
            HttpResponse::Ok().json(destination)
        }
        Err(e) => error_response(&e),
    }
}
