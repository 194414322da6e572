//! # Destination Service Module
//!
//! Routes for the destination catalog under `/api/destinations`.
//!
//! ## Sub-modules:
//! - `list`: returns every destination in the order they were added.
//! - `create`: validates a `DestinationDraft` and stores it under a fresh UUID.
//! - `update`: replaces name, days and months of an existing destination.
//! - `delete`: removes a destination and every grid cell it was planned in.

mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/destinations";

/// Configures and returns the Actix `Scope` for the destination routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, `200 OK` with `[Destination]`.
/// *   **`POST /`**: `create::process`, expects a `DestinationDraft` JSON body and
///     answers `201 Created` with the stored `Destination`.
/// *   **`PUT /{id}`**: `update::process`, expects a `DestinationDraft`; `404` for
///     unknown ids. Existing grid cells are not re-checked against the new months.
/// *   **`DELETE /{id}`**: `delete::process`, `204 No Content`. Deleting an unknown
///     id is not an error.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
