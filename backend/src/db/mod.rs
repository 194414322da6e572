//! SQLite storage for the planner.
//!
//! - `Database`: where the SQLite file lives; opens connections and creates the schema.
//! - `store`: `SqliteStore`, the `PlannerRepository` the HTTP handlers call into.
//! - `seed`: the sample destinations inserted into an empty database.
//!
//! A fresh connection is opened per call. Writes are serialized by SQLite, so
//! concurrent requests on the same cell resolve as last-write-wins.

pub mod seed;
pub mod store;

use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS destinations (
        id     TEXT PRIMARY KEY,
        name   TEXT NOT NULL,
        days   INTEGER NOT NULL,
        months TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS assignments (
        year           INTEGER NOT NULL,
        vacation_type  TEXT NOT NULL,
        destination_id TEXT NOT NULL REFERENCES destinations(id) ON DELETE CASCADE,
        PRIMARY KEY (year, vacation_type)
    );
";

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Database {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a connection with foreign keys enforced.
    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Creates the tables if they do not exist yet.
    pub fn init(&self) -> rusqlite::Result<()> {
        self.connect()?.execute_batch(SCHEMA)
    }
}
