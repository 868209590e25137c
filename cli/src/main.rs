//! `linklists`: operator tool for a link list database.
//!
//! Usage:
//!   linklists --settings linklists.toml import partners.json
//!   linklists list --allow-local
//!   linklists render <id> --lang fr
//!
//! The database path, base language and bundles come from the settings
//! file; without one the built-in defaults apply.

use anyhow::{Context, Result};
use clap::Parser;
use linklists_cli::{Command, execute};
use linklists_engine::{LinkListService, Settings};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linklists")]
#[command(about = "Import, list and render link lists")]
struct Args {
    /// Path to the TOML settings file
    #[arg(short, long, default_value = "linklists.toml")]
    settings: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::load_from(&args.settings)
        .with_context(|| format!("Failed to load settings from {}", args.settings.display()))?;
    debug!("Using database {:?}", settings.database_path);
    let service = LinkListService::open(settings).context("Failed to open link list database")?;

    print!("{}", execute(&service, &args.command)?);
    Ok(())
}
