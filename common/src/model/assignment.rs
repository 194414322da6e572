use crate::model::destination::DestinationId;
use crate::model::vacation::VacationType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one grid cell. Ordered by year first, then vacation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub year: i32,
    pub vacation_type: VacationType,
}

impl CellKey {
    pub fn new(year: i32, vacation_type: VacationType) -> Self {
        CellKey {
            year,
            vacation_type,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vacation_type, self.year)
    }
}

/// A destination placed into a grid cell.
///
/// Only the destination id is stored; it is resolved against the place store
/// whenever the cell is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub year: i32,
    pub vacation_type: VacationType,
    pub destination_id: DestinationId,
}

impl Assignment {
    pub fn new(key: CellKey, destination_id: DestinationId) -> Self {
        Assignment {
            year: key.year,
            vacation_type: key.vacation_type,
            destination_id,
        }
    }

    pub fn key(&self) -> CellKey {
        CellKey::new(self.year, self.vacation_type)
    }
}
