use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    MigrationConfig, ServerConfig, DEFAULT_DB_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_PUBLIC_DIR,
};

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

#[derive(Parser)]
#[command(name = "openmd")]
#[command(about = "AI-native note tool: agents write markdown, humans read HTML")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    // Service settings used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the note service (default)
    Serve(ServeArgs),
    /// Add visibility, password and expiry columns to a notes database
    Migrate(MigrateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Address to bind
    #[arg(long, env = "OPENMD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Directory of static files served for unmatched paths
    #[arg(long, env = "OPENMD_PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,
    /// Base URL used in share links (e.g. https://md.example.com)
    #[arg(long, env = "OPENMD_PUBLIC_URL")]
    pub public_url: Option<String>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            public_dir: args.public_dir,
            public_url: args.public_url,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Database file (default: <data dir>/openmd/openmd.db)
    #[arg(short, long, env = "OPENMD_DATABASE")]
    pub database: Option<PathBuf>,
    /// Seconds to wait on a locked database before a step fails
    #[arg(long, env = "OPENMD_DB_TIMEOUT_SECS", default_value_t = DEFAULT_DB_TIMEOUT_SECS)]
    pub busy_timeout_secs: u64,
}

impl TryFrom<MigrateArgs> for MigrationConfig {
    type Error = anyhow::Error;

    fn try_from(args: MigrateArgs) -> Result<Self, Self::Error> {
        MigrationConfig::new(args.database, args.busy_timeout_secs)
    }
}
