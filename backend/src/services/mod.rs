//! HTTP API of the planner.
//!
//! Every area registers its own `Scope` through a `configure_routes` function:
//! - `destinations`: the destination catalog (`/api/destinations`).
//! - `assignments`: the year × vacation-type grid (`/api/assignments`).
//!
//! Handlers call into the shared `SqliteStore` (registered as `web::Data`) through
//! the `PlannerRepository` trait and translate `PlannerError`s with
//! [`error_response`].

pub mod assignments;
pub mod destinations;

#[cfg(test)]
mod tests;

use actix_web::{web, HttpResponse};
use common::error::PlannerError;
use log::{error, warn};

/// Registers every API scope on an application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(destinations::configure_routes())
        .service(assignments::configure_routes());
}

/// Maps a planner error to its HTTP status. The body is the error message.
///
/// - `400 Bad Request`: invalid destination draft.
/// - `404 Not Found`: the destination does not exist.
/// - `409 Conflict`: the destination does not travel in the vacation's month.
/// - `503 Service Unavailable`: the database failed.
pub(crate) fn error_response(err: &PlannerError) -> HttpResponse {
    let mut response = match err {
        PlannerError::Validation(_) => HttpResponse::BadRequest(),
        PlannerError::UnknownDestination(_) => HttpResponse::NotFound(),
        PlannerError::IncompatibleAssignment { .. } => HttpResponse::Conflict(),
        PlannerError::Persistence(_) => HttpResponse::ServiceUnavailable(),
    };
    match err {
        PlannerError::Persistence(_) => error!("{}", err),
        _ => warn!("request rejected: {}", err),
    }
    response.body(err.to_string())
}
