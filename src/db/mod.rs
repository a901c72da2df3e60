use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

mod migrate;
mod schema;

pub use migrate::{run_visibility_migration, MigrationReport};
pub use schema::{MigrationStep, StepCheck, VISIBILITY_STEPS};

/// Connection to the relational database holding the persistent `notes` table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database file. Never creates one.
    pub fn open_at(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open database {}", path.display()))?;
        conn.busy_timeout(busy_timeout)?;

        Ok(Self { conn })
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database connection")
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn column_exists(&self, table: &str, column: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
            [table, column],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn index_exists(&self, index: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = ?1",
            [index],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
