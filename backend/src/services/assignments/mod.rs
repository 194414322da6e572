//! # Assignment Service Module
//!
//! Routes for the planning grid under `/api/assignments`. A cell is addressed by
//! its year and the slug of its vacation type (`annual-break`, `summer-vacation`,
//! `puja`, `christmas`).
//!
//! *   **`GET /`**: every filled cell, ordered by year then vacation type.
//! *   **`PUT /`**: stores an `Assignment`, replacing whatever the cell held.
//!     `404` if the destination does not exist, `409` if it does not travel in the
//!     vacation's month.
//! *   **`DELETE /{year}/{vacation_type}`**: empties the cell; emptying an empty
//!     cell succeeds as well.

mod delete;
mod list;
mod upsert;

use actix_web::web::{delete, get, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/assignments";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", put().to(upsert::process))
        .route("/{year}/{vacation_type}", delete().to(delete::process))
}
