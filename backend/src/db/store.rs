use super::Database;
use async_trait::async_trait;
use common::error::{PlannerError, PlannerResult};
use common::model::assignment::{Assignment, CellKey};
use common::model::destination::{Destination, DestinationDraft, DestinationId};
use common::model::month::Month;
use common::model::vacation::{check_compatible, VacationType};
use common::repository::PlannerRepository;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;
use uuid::Uuid;

/// `PlannerRepository` backed by the SQLite file of a [`Database`].
///
/// The store applies the same rules as the planner (draft validation, the
/// compatibility rule, cascading deletes) so a client that skips its own checks
/// still cannot corrupt the grid.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        SqliteStore { db }
    }

    fn conn(&self) -> PlannerResult<Connection> {
        self.db.connect().map_err(PlannerError::persistence)
    }
}

#[async_trait(?Send)]
impl PlannerRepository for SqliteStore {
    async fn list_destinations(&self) -> PlannerResult<Vec<Destination>> {
        read_destinations(&self.conn()?)
    }

    async fn create_destination(&self, draft: &DestinationDraft) -> PlannerResult<Destination> {
        let draft = draft.validate()?;
        let destination = draft.into_destination(DestinationId::new(Uuid::new_v4().to_string()));
        insert_destination(&self.conn()?, &destination)?;
        debug!("stored destination {} as {}", destination.name, destination.id);
        Ok(destination)
    }

    async fn update_destination(
        &self,
        id: &DestinationId,
        draft: &DestinationDraft,
    ) -> PlannerResult<Destination> {
        let draft = draft.validate()?;
        let updated = self
            .conn()?
            .execute(
                "UPDATE destinations SET name = ?1, days = ?2, months = ?3 WHERE id = ?4",
                params![draft.name, draft.days, encode_months(&draft.months)?, id.as_str()],
            )
            .map_err(PlannerError::persistence)?;
        if updated == 0 {
            return Err(PlannerError::UnknownDestination(id.clone()));
        }
        Ok(draft.into_destination(id.clone()))
    }

    async fn delete_destination(&self, id: &DestinationId) -> PlannerResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction().map_err(PlannerError::persistence)?;
        let cleared = tx
            .execute(
                "DELETE FROM assignments WHERE destination_id = ?1",
                params![id.as_str()],
            )
            .map_err(PlannerError::persistence)?;
        tx.execute("DELETE FROM destinations WHERE id = ?1", params![id.as_str()])
            .map_err(PlannerError::persistence)?;
        tx.commit().map_err(PlannerError::persistence)?;
        debug!("deleted destination {} and {} assignments", id, cleared);
        Ok(())
    }

    async fn list_assignments(&self) -> PlannerResult<Vec<Assignment>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT year, vacation_type, destination_id FROM assignments")
            .map_err(PlannerError::persistence)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i32>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(PlannerError::persistence)?;

        let mut assignments = rows
            .map(|row| {
                let (year, vacation_type, destination_id) = row.map_err(PlannerError::persistence)?;
                let vacation_type = vacation_type
                    .parse::<VacationType>()
                    .map_err(PlannerError::Persistence)?;
                Ok(Assignment {
                    year,
                    vacation_type,
                    destination_id: destination_id.into(),
                })
            })
            .collect::<PlannerResult<Vec<_>>>()?;
        assignments.sort_by_key(Assignment::key);
        Ok(assignments)
    }

    async fn upsert_assignment(&self, assignment: &Assignment) -> PlannerResult<()> {
        let conn = self.conn()?;
        let destination = find_destination(&conn, &assignment.destination_id)?
            .ok_or_else(|| PlannerError::UnknownDestination(assignment.destination_id.clone()))?;
        check_compatible(&destination, assignment.vacation_type)?;
        conn.execute(
            "INSERT OR REPLACE INTO assignments (year, vacation_type, destination_id) VALUES (?1, ?2, ?3)",
            params![
                assignment.year,
                assignment.vacation_type.slug(),
                assignment.destination_id.as_str()
            ],
        )
            .map_err(PlannerError::persistence)?;
        Ok(())
    }

    async fn delete_assignment(&self, key: CellKey) -> PlannerResult<()> {
        self.conn()?
            .execute(
                "DELETE FROM assignments WHERE year = ?1 AND vacation_type = ?2",
                params![key.year, key.vacation_type.slug()],
            )
            .map_err(PlannerError::persistence)?;
        Ok(())
    }
}

pub(crate) fn insert_destination(conn: &Connection, destination: &Destination) -> PlannerResult<()> {
    conn.execute(
        "INSERT INTO destinations (id, name, days, months) VALUES (?1, ?2, ?3, ?4)",
        params![
            destination.id.as_str(),
            destination.name,
            destination.days,
            encode_months(&destination.months)?
        ],
    )
        .map_err(PlannerError::persistence)?;
    Ok(())
}

pub(crate) fn read_destinations(conn: &Connection) -> PlannerResult<Vec<Destination>> {
    let mut stmt = conn
        .prepare("SELECT id, name, days, months FROM destinations ORDER BY rowid")
        .map_err(PlannerError::persistence)?;
    let rows = stmt
        .query_map([], destination_columns)
        .map_err(PlannerError::persistence)?;
    let destinations = rows
        .map(|row| row.map_err(PlannerError::persistence).and_then(decode_destination))
        .collect::<PlannerResult<Vec<_>>>()?;
    Ok(destinations)
}

fn find_destination(conn: &Connection, id: &DestinationId) -> PlannerResult<Option<Destination>> {
    conn.query_row(
        "SELECT id, name, days, months FROM destinations WHERE id = ?1",
        params![id.as_str()],
        destination_columns,
    )
        .optional()
        .map_err(PlannerError::persistence)?
        .map(decode_destination)
        .transpose()
}

type DestinationRow = (String, String, u32, String);

fn destination_columns(row: &rusqlite::Row<'_>) -> rusqlite::Result<DestinationRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn decode_destination((id, name, days, months): DestinationRow) -> PlannerResult<Destination> {
    Ok(Destination {
        id: id.into(),
        name,
        days,
        months: serde_json::from_str(&months).map_err(PlannerError::persistence)?,
    })
}

/// Months are stored as a JSON array of names, e.g. `["March","October"]`.
fn encode_months(months: &BTreeSet<Month>) -> PlannerResult<String> {
    serde_json::to_string(months).map_err(PlannerError::persistence)
}
