//! Challonge CLI - manage tournaments, participants and matches from the terminal
//!
//! Credentials come from `--username`/`--api-key` or the `CHALLONGE_USERNAME` and
//! `CHALLONGE_API_KEY` environment variables. When no key is given and stdin is a
//! terminal, the key is prompted for. Credentials are never written to disk.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use challonge_client::{ChallongeClient, Credential};
use challonge_core::SettingsManager;
use commands::Command;

/// Challonge API client
#[derive(Parser, Debug)]
#[command(name = "challonge")]
#[command(version)]
#[command(about = "Command-line client for the Challonge tournament API")]
struct Args {
    /// Challonge account username
    #[arg(long, env = "CHALLONGE_USERNAME", global = true)]
    username: Option<String>,

    /// Challonge API key (prompted for when omitted)
    #[arg(long, env = "CHALLONGE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API base URL from settings
    #[arg(long, env = "CHALLONGE_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Directory holding settings.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = match args.config_dir.clone() {
        Some(dir) => dir,
        None => SettingsManager::default_dir()?,
    };
    let mut settings = SettingsManager::new(&config_dir)
        .map_err(|e| format!("Failed to load settings: {}", e))?;
    debug!("Using settings from {:?}", settings.path());

    if let Command::Config(config) = &args.command {
        return commands::run_config(config, &mut settings).await;
    }

    let mut effective = settings.get().clone();
    if let Some(base_url) = &args.base_url {
        effective.base_url = base_url.clone();
    }

    let api_key = match args.api_key {
        Some(key) => key,
        None => rpassword::prompt_password("Challonge API key: ")?,
    };
    let credential = Credential::with_policy(
        args.username.unwrap_or_default(),
        api_key,
        effective.username_policy,
    )?;

    let client = ChallongeClient::new(credential, &effective)?;
    let output = commands::run(&client, args.command).await?;

    println!("{}", output);
    Ok(())
}
