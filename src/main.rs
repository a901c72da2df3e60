use clap::Parser;
use openmd::cli::{run_migrate, run_serve, Cli, Commands};
use openmd::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        None => {
            // No subcommand provided - run the note service
            run_serve(cli.serve)?;
        }
        Some(Commands::Serve(args)) => {
            run_serve(args)?;
        }
        Some(Commands::Migrate(args)) => {
            run_migrate(args)?;
        }
    }

    Ok(())
}
