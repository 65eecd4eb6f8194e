//! Vaga - Terminal viewer for the Vagas job board
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! vaga -u https://project.example.co -k <ANON_KEY>
//!
//! # One page of listings, filtered
//! vaga --list --search nurse --location Campinas
//!
//! # One job in JSON
//! vaga --job 42 --json
//! ```

use clap::Parser;

use vaga_cli::{CLIConfiguration, CLIError, Result};

mod args;
mod connect;

use args::Cli;
use connect::create_session;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose surfaces the link crate's debug lines
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load configuration
    let config = CLIConfiguration::load(&cli.config)?;

    let mut session = create_session(&cli, &config)?;

    // Execute based on mode
    match (cli.list, cli.job, cli.stats) {
        // One page of listings
        (true, None, false) => {
            session.load_jobs(cli.page).await?;
        }

        // One job's details
        (false, Some(id), false) => {
            session.open_job(id).await?;
        }

        // Board statistics
        (false, None, true) => {
            session.show_statistics().await?;
        }

        // Interactive mode
        (false, None, false) => {
            session.run_interactive().await?;
        }

        // Invalid combination
        _ => {
            return Err(CLIError::ConfigurationError(
                "--list, --job and --stats are mutually exclusive".into(),
            ));
        }
    }

    Ok(())
}
