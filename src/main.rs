mod client;
mod commands;
mod config;
mod prompts;
mod render;
mod surface;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "eventsync")]
#[command(about = "List, add, edit, delete and export events on your calendar server")]
struct Cli {
    /// Server URL (overrides server_url from config.toml)
    #[arg(long, global = true, env = "EVENTSYNC_SERVER")]
    server: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all events, grouped by day
    Events,
    /// Add an event (prompts for anything missing)
    Add {
        /// Event title
        #[arg(short, long)]
        title: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete an event by id
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Change an existing event (prompts when no field flags are given)
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM, empty for untimed)
        #[arg(long)]
        time: Option<String>,
    },
    /// Open the PDF report of all events in the browser
    Export {
        /// Save the PDF to this path instead of opening a browser
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Create an account on the server
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Interactive calendar session
    Ui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    match cli.command {
        // Registering is the one thing that works without logging in first.
        Commands::Register { name, email } => commands::register::run(&config, name, email).await,
        Commands::Events => commands::events::run(&commands::connect(&config).await?).await,
        Commands::Add {
            title,
            description,
            date,
            time,
        } => {
            let client = commands::connect(&config).await?;
            commands::add::run(&client, title, description, date, time).await
        }
        Commands::Delete { id, yes } => {
            let client = commands::connect(&config).await?;
            commands::delete::run(&client, id, yes).await
        }
        Commands::Edit {
            id,
            title,
            description,
            date,
            time,
        } => {
            let client = commands::connect(&config).await?;
            commands::edit::run(&client, id, title, description, date, time).await
        }
        Commands::Export { save } => {
            let client = commands::connect(&config).await?;
            commands::export::run(&client, save).await
        }
        Commands::Ui => commands::ui::run(&commands::connect(&config).await?).await,
    }
}

/// Log to stderr so rendered calendars on stdout stay clean.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))
}
