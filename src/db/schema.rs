/// Table the visibility migration evolves.
pub const NOTES_TABLE: &str = "notes";

/// How to tell whether a step has already been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCheck {
    Column(&'static str),
    Index(&'static str),
    /// Applied when no row has a NULL visibility
    NoNullVisibility,
}

#[derive(Debug, Clone, Copy)]
pub struct MigrationStep {
    pub name: &'static str,
    pub check: StepCheck,
    pub sql: &'static str,
}

/// Add visibility/password/expiry columns, their indexes, then backfill.
/// Columns before indexes, indexes before the backfill.
pub const VISIBILITY_STEPS: [MigrationStep; 6] = [
    MigrationStep {
        name: "visibility column",
        check: StepCheck::Column("visibility"),
        sql: MIGRATION_ADD_VISIBILITY,
    },
    MigrationStep {
        name: "password column",
        check: StepCheck::Column("password"),
        sql: MIGRATION_ADD_PASSWORD,
    },
    MigrationStep {
        name: "expires_at column",
        check: StepCheck::Column("expires_at"),
        sql: MIGRATION_ADD_EXPIRES_AT,
    },
    MigrationStep {
        name: "visibility index",
        check: StepCheck::Index("idx_visibility"),
        sql: MIGRATION_INDEX_VISIBILITY,
    },
    MigrationStep {
        name: "expires_at index",
        check: StepCheck::Index("idx_expires_at"),
        sql: MIGRATION_INDEX_EXPIRES_AT,
    },
    MigrationStep {
        name: "public backfill",
        check: StepCheck::NoNullVisibility,
        sql: MIGRATION_BACKFILL_VISIBILITY,
    },
];

/// SQLite has no ENUM; a CHECK constraint limits the allowed values.
pub const MIGRATION_ADD_VISIBILITY: &str = r#"
ALTER TABLE notes ADD COLUMN visibility TEXT DEFAULT 'public'
    CHECK (visibility IN ('public', 'private', 'password'));
"#;

pub const MIGRATION_ADD_PASSWORD: &str = r#"
ALTER TABLE notes ADD COLUMN password VARCHAR(255);
"#;

pub const MIGRATION_ADD_EXPIRES_AT: &str = r#"
ALTER TABLE notes ADD COLUMN expires_at TIMESTAMP;
"#;

pub const MIGRATION_INDEX_VISIBILITY: &str = r#"
CREATE INDEX idx_visibility ON notes(visibility);
"#;

pub const MIGRATION_INDEX_EXPIRES_AT: &str = r#"
CREATE INDEX idx_expires_at ON notes(expires_at);
"#;

pub const MIGRATION_BACKFILL_VISIBILITY: &str = r#"
UPDATE notes SET visibility = 'public' WHERE visibility IS NULL;
"#;

/// The persistent `notes` table as it stood before the visibility migration.
#[cfg(test)]
pub const NOTES_TABLE_V1: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL DEFAULT 'Untitled',
    content TEXT NOT NULL,
    metadata TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;
