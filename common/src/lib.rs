//! Shared model and planning logic for the vacation planner.
//!
//! Both the `backend` (actix-web + SQLite) and the `frontend` (Yew) depend on this
//! crate, so everything here compiles for native targets and for `wasm32`.
//!
//! - `model`: destinations, months, vacation types and grid assignments, plus the
//!   compatibility rule tying a vacation type to its month.
//! - `planner`: the in-memory place store, assignment grid and drag session, and the
//!   `Planner` service that validates, persists and commits every change.
//! - `repository`: the persistence interface the planner is given, with an
//!   in-memory implementation.
//! - `error`: the error kinds shared across the workspace.

pub mod error;
pub mod model;
pub mod planner;
pub mod repository;
