use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::repository::PlannerRepository;

pub async fn process(store: web::Data<SqliteStore>) -> impl Responder {
    match store.list_destinations().await {
        Ok(destinations) => HttpResponse::Ok().json(destinations),
        Err(e) => error_response(&e),
    }
}
