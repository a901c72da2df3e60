use anyhow::{Context, Result};

use super::ServeArgs;
use crate::server::NoteServer;

/// Run the note service on a multi-threaded runtime until shutdown.
pub fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(NoteServer::new(args.into()).start())
}
