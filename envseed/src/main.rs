//! Seed a local `.env` file with `API_KEY` and `DATABASE_URL`.
//!
//! Values come from flags, `ENVSEED_*` variables, or `envseed.toml`; an
//! existing target is only replaced after the operator answers `y`.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use envseed::check::run_check;
use envseed::exit_codes;
use envseed::io::settings::{DEFAULT_SETTINGS_PATH, load_settings};
use envseed::logging;
use envseed::write::{ValueSources, WriteOutcome, resolve_request, run_write};

#[derive(Parser)]
#[command(
    name = "envseed",
    version,
    about = "Write API_KEY and DATABASE_URL into a local .env file"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the target file, asking before replacing an existing one.
    Write {
        #[command(flatten)]
        location: Location,
        /// Value for API_KEY.
        #[arg(long, env = "ENVSEED_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Value for DATABASE_URL.
        #[arg(long, env = "ENVSEED_DATABASE_URL", hide_env_values = true)]
        database_url: Option<String>,
        /// Overwrite an existing target without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Load the target as a dotenv file and print its entries masked.
    Check {
        #[command(flatten)]
        location: Location,
    },
}

#[derive(Args)]
struct Location {
    /// Target .env file [default: target from settings, else .env].
    #[arg(long)]
    target: Option<PathBuf>,
    /// Settings file.
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Write {
            location,
            api_key,
            database_url,
            force,
        } => cmd_write(location, api_key, database_url, force),
        Command::Check { location } => cmd_check(location),
    }
}

fn cmd_write(
    location: Location,
    api_key: Option<String>,
    database_url: Option<String>,
    force: bool,
) -> Result<()> {
    let settings = load_settings(&location.config)?;
    let sources = ValueSources {
        target: location.target,
        api_key,
        database_url,
    };
    let request = resolve_request(sources, settings, force)?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    match run_write(&request, &mut input, &mut output)? {
        WriteOutcome::Written { path, .. } => debug!(path = %path.display(), "write complete"),
        WriteOutcome::Declined { path } => debug!(path = %path.display(), "write declined"),
    }
    Ok(())
}

fn cmd_check(location: Location) -> Result<()> {
    let settings = load_settings(&location.config)?;
    let target = location.target.unwrap_or(settings.target);
    run_check(&target, &mut io::stdout().lock())?;
    Ok(())
}
