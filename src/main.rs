//! ufwban - Persistent IP blocklist manager backed by UFW.
//!
//! Validates IP addresses, keeps a JSON-backed blocklist on disk, and
//! mirrors every change into UFW deny rules.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ufwban::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Add { ip } => ufwban::commands::add::run(&ip, &cli.config),
        Commands::Remove { ip } => ufwban::commands::remove::run(&ip, &cli.config),
        Commands::Check { ip } => ufwban::commands::check::run(&ip, &cli.config),
        Commands::List => ufwban::commands::list::run(&cli.config),
        Commands::Version => {
            println!("ufwban {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
