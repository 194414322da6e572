//! Sample catalog loaded into an empty database on first start.

use super::store::{insert_destination, read_destinations};
use super::Database;
use common::error::{PlannerError, PlannerResult};
use common::model::destination::{DestinationDraft, DestinationId};
use common::model::month::Month::{self, December, March, May, October, September};

const SAMPLE: &[(&str, &str, u32, &[Month])] = &[
    ("1", "Kazakhstan + Uzbekistan", 14, &[May]),
    ("2", "Egypt", 9, &[March, October]),
    ("3", "Varanasi", 4, &[March, December]),
    ("4", "Singapore + Malaysia", 9, &[March, May, October]),
    ("5", "Maldives + Sri Lanka", 14, &[March]),
    ("6", "Hyderabad", 4, &[March, December]),
    ("7", "Georgia + Azerbaijan", 14, &[March, May]),
    ("8", "Dubai", 5, &[March]),
    ("9", "Iceland", 9, &[September, October]),
    ("10", "Kedarnath", 9, &[May]),
    ("11", "Nepal", 6, &[October]),
    ("12", "Vietnam", 9, &[December, March]),
    ("13", "China", 9, &[March, October]),
    ("14", "Bhutan", 9, &[March, October]),
];

/// Inserts the sample destinations if the table is empty. Returns how many were inserted.
pub fn seed_if_empty(db: &Database) -> PlannerResult<usize> {
    let mut conn = db.connect().map_err(PlannerError::persistence)?;
    if !read_destinations(&conn)?.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction().map_err(PlannerError::persistence)?;
    for (id, name, days, months) in SAMPLE {
        let destination = DestinationDraft::new(*name, *days, months.iter().copied())
            .into_destination(DestinationId::from(*id));
        insert_destination(&tx, &destination)?;
    }
    tx.commit().map_err(PlannerError::persistence)?;
    Ok(SAMPLE.len())
}
