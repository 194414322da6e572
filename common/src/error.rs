//! Error kinds shared by the planner, the backend API and the frontend.
//!
//! None of these are fatal: every one of them leaves the planner state as it was
//! before the rejected action, so the user can simply retry.

use crate::model::destination::DestinationId;
use crate::model::month::Month;
use crate::model::vacation::VacationType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the planner.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Rejected user input, caught before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("destination name must not be empty")]
    EmptyName,
    #[error("at least one travel month must be selected")]
    NoMonths,
    #[error("trip length must be between 1 and 30 days, got {0}")]
    DurationOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlannerError {
    #[error("invalid destination: {0}")]
    Validation(#[from] ValidationError),

    /// The destination does not travel in the month the vacation type requires.
    #[error("{destination} is not valid for {vacation_type} (requires {required})")]
    IncompatibleAssignment {
        destination: String,
        vacation_type: VacationType,
        required: Month,
    },

    #[error("destination {0} not found")]
    UnknownDestination(DestinationId),

    /// The store failed; the message is opaque to the planner.
    #[error("storage failure: {0}")]
    Persistence(String),
}

impl PlannerError {
    pub fn persistence(err: impl ToString) -> Self {
        PlannerError::Persistence(err.to_string())
    }
}
