//! One-shot visibility migration for the persistent notes table.

use anyhow::Result;
use tracing::{error, info, warn};

use super::MigrateArgs;
use crate::config::MigrationConfig;
use crate::db::{run_visibility_migration, Database, MigrationReport};

/// Run the migration against the configured database.
pub fn run_migrate(args: MigrateArgs) -> Result<MigrationReport> {
    let config = MigrationConfig::try_from(args)?;
    migrate_database(&config)
}

/// Open, migrate and close. The connection is closed whether the
/// migration succeeds, fails or has nothing to do.
pub fn migrate_database(config: &MigrationConfig) -> Result<MigrationReport> {
    info!("Migrating {}", config.database.display());
    let db = Database::open_at(&config.database, config.busy_timeout)?;

    let (result, closed) = migrate_and_close(db);
    match closed {
        Ok(()) => info!("Database connection closed"),
        Err(e) => warn!("{:#}", e),
    }

    match &result {
        Ok(report) if report.is_noop() => info!("Nothing to do"),
        Ok(report) => info!("Migration finished: {} step(s) applied", report.applied.len()),
        Err(e) => error!("Migration failed: {:#}", e),
    }

    result
}

/// Run the migration, then close the connection whatever the outcome.
fn migrate_and_close(db: Database) -> (Result<MigrationReport>, Result<()>) {
    let result = run_visibility_migration(&db);
    let closed = db.close();
    (result, closed)
}
