use anyhow::{bail, Context, Result};
use tracing::{error, info};

use super::schema::{MigrationStep, StepCheck, NOTES_TABLE, VISIBILITY_STEPS};
use super::Database;

/// What a migration run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl MigrationReport {
    /// True when the schema was already fully migrated.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

fn is_applied(db: &Database, step: &MigrationStep) -> Result<bool> {
    match step.check {
        StepCheck::Column(column) => db.column_exists(NOTES_TABLE, column),
        StepCheck::Index(index) => db.index_exists(index),
        StepCheck::NoNullVisibility => {
            if !db.column_exists(NOTES_TABLE, "visibility")? {
                return Ok(false);
            }
            let nulls: i64 = db.conn().query_row(
                "SELECT COUNT(*) FROM notes WHERE visibility IS NULL",
                [],
                |row| row.get(0),
            )?;
            Ok(nulls == 0)
        }
    }
}

/// Columns and indexes; the backfill only runs alongside one of these.
fn is_schema_step(step: &MigrationStep) -> bool {
    !matches!(step.check, StepCheck::NoNullVisibility)
}

/// Add the visibility, password and expiry columns to `notes`.
///
/// Each step is checked before it runs, so a rerun after a partial failure
/// picks up where the last one stopped. A failing step aborts the rest;
/// there is no enclosing transaction. Once every column and index exists
/// nothing runs, so NULL visibility written later by the application is
/// left alone.
pub fn run_visibility_migration(db: &Database) -> Result<MigrationReport> {
    if !db.table_exists(NOTES_TABLE)? {
        bail!("Table '{}' does not exist", NOTES_TABLE);
    }

    let mut pending = 0;
    for step in VISIBILITY_STEPS.iter().filter(|s| is_schema_step(s)) {
        if !is_applied(db, step)? {
            pending += 1;
        }
    }

    if pending == 0 {
        info!("visibility column already exists, skipping migration");
        return Ok(MigrationReport {
            applied: Vec::new(),
            skipped: VISIBILITY_STEPS.iter().map(|s| s.name).collect(),
        });
    }

    info!("Starting migration ({} schema step(s) pending)", pending);

    let mut report = MigrationReport::default();
    for step in VISIBILITY_STEPS.iter() {
        // Earlier steps can satisfy later checks, e.g. the column default
        // leaves nothing for the backfill.
        if is_applied(db, step)? {
            info!("Skipped {} (already applied)", step.name);
            report.skipped.push(step.name);
            continue;
        }

        if let Err(e) = db.conn().execute_batch(step.sql) {
            error!("Failed to apply {}: {}", step.name, e);
            return Err(e).with_context(|| format!("Migration step '{}' failed", step.name));
        }
        info!("Applied {}", step.name);
        report.applied.push(step.name);
    }

    info!("Migration complete");
    Ok(report)
}
