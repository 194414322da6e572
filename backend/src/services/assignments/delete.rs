use crate::db::store::SqliteStore;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::assignment::CellKey;
use common::model::vacation::VacationType;
use common::repository::PlannerRepository;
use log::info;

/// Actix web handler for `DELETE /api/assignments/{year}/{vacation_type}`.
///
/// # Returns
/// - `204 No Content` once the cell is empty.
/// - `400 Bad Request` if `vacation_type` is not a known slug.
pub async fn process(
    store: web::Data<SqliteStore>,
    path: web::Path<(i32, String)>,
) -> impl Responder {
    let (year, slug) = path.into_inner();
    let vacation_type = match slug.parse::<VacationType>() {
        Ok(vacation_type) => vacation_type,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let key = CellKey::new(year, vacation_type);
    match store.delete_assignment(key).await {
        Ok(()) => {
            info!("cleared {}", key);
            HttpResponse::NoContent().finish()
        }
        Err(e) => error_response(&e),
    }
}
