//! Destinations as the user catalogs them: a name, a trip length and the months
//! in which the trip makes sense.

use crate::error::ValidationError;
use crate::model::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Shortest trip the form accepts.
pub const MIN_DAYS: u32 = 1;
/// Longest trip the form accepts.
pub const MAX_DAYS: u32 = 30;

/// Stable, unique identifier of a destination.
///
/// The backend hands out UUIDs; the seeded catalog uses small numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        DestinationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        DestinationId(id.to_string())
    }
}

impl From<String> for DestinationId {
    fn from(id: String) -> Self {
        DestinationId(id)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    /// Trip length in days.
    pub days: u32,
    /// Months in which the destination can be visited.
    pub months: BTreeSet<Month>,
}

impl Destination {
    /// The editable part of this destination, e.g. to prefill the edit form.
    pub fn draft(&self) -> DestinationDraft {
        DestinationDraft {
            name: self.name.clone(),
            days: self.days,
            months: self.months.clone(),
        }
    }
}

/// Everything about a destination except its id: the payload of create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DestinationDraft {
    pub name: String,
    pub days: u32,
    pub months: BTreeSet<Month>,
}

impl DestinationDraft {
    pub fn new(name: impl Into<String>, days: u32, months: impl IntoIterator<Item = Month>) -> Self {
        DestinationDraft {
            name: name.into(),
            days,
            months: months.into_iter().collect(),
        }
    }

    /// Checks the draft and returns it with the name trimmed.
    ///
    /// Rejects an empty (or blank) name, an empty month set and trip lengths
    /// outside `MIN_DAYS..=MAX_DAYS`.
    pub fn validate(&self) -> Result<DestinationDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.months.is_empty() {
            return Err(ValidationError::NoMonths);
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(ValidationError::DurationOutOfRange(self.days));
        }
        Ok(DestinationDraft {
            name: name.to_string(),
            days: self.days,
            months: self.months.clone(),
        })
    }

    pub fn into_destination(self, id: DestinationId) -> Destination {
        Destination {
            id,
            name: self.name,
            days: self.days,
            months: self.months,
        }
    }
}
