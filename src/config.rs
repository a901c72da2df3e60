//! Runtime settings for the note service and the schema migration.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Port the note service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for paths no route matches
    pub public_dir: PathBuf,
    /// Base for share links; derived from request headers when unset
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            public_url: None,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub database: PathBuf,
    /// How long a statement waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl MigrationConfig {
    pub fn new(database: Option<PathBuf>, busy_timeout_secs: u64) -> Result<Self> {
        let database = match database {
            Some(path) => path,
            None => default_database_path()?,
        };
        Ok(Self {
            database,
            busy_timeout: Duration::from_secs(busy_timeout_secs),
        })
    }
}

pub fn default_database_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow!("Could not find data directory"))?;
    Ok(data_dir.join("openmd").join("openmd.db"))
}
