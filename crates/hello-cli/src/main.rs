//! Hello CLI
//!
//! Usage:
//!   hello show                  Print the configured greeting
//!   hello show --json           Print it as JSON
//!   hello init                  Write .hello/config.toml with defaults

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hello_core::{Greeting, HelloConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hello")]
#[command(author, version, about = "Print a titled greeting")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a greeting
    Show {
        /// Title (overrides config)
        #[arg(long)]
        title: Option<String>,

        /// Message (overrides config)
        #[arg(long)]
        message: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Repository path holding .hello/config.toml
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Write the default config
    Init {
        /// Repository path (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Show {
            title,
            message,
            json,
            path,
        } => cmd_show(title, message, json, path),
        Commands::Init { path } => cmd_init(path),
    }
}

fn cmd_show(
    title: Option<String>,
    message: Option<String>,
    json: bool,
    path: PathBuf,
) -> Result<()> {
    println!("{}", render_show(title, message, json, &path)?);
    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    println!("{}", render_init(&path)?);
    Ok(())
}

/// Text printed by `hello show`
fn render_show(
    title: Option<String>,
    message: Option<String>,
    json: bool,
    path: &Path,
) -> Result<String> {
    let config = HelloConfig::load_or_default(path).context("Failed to load config")?;
    let greeting = resolve_greeting(config, title, message);
    debug!("Resolved greeting: {:?}", greeting);

    if json {
        Ok(greeting.to_json()?)
    } else {
        Ok(greeting.to_string())
    }
}

/// Text printed by `hello init`
fn render_init(path: &Path) -> Result<String> {
    info!("Initializing Hello in {:?}", path);
    let written = HelloConfig::write_default(path).context("Failed to write config")?;
    Ok(format!("Created {}", written.display()))
}

/// Flags win over config; config fills whatever was not given.
fn resolve_greeting(
    config: HelloConfig,
    title: Option<String>,
    message: Option<String>,
) -> Greeting {
    let defaults = config.greeting;
    Greeting::new(
        title.unwrap_or(defaults.title),
        message.unwrap_or(defaults.message),
    )
}
