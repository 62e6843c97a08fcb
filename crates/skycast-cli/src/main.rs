use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skycast_types::Units;
use tracing_subscriber::EnvFilter;

use skycast_cli::config::{self, Config};
use skycast_cli::{summary, tui};

#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Terminal weather dashboard", long_about = None)]
struct Cli {
    /// City to search on startup (defaults to the last searched city)
    city: Option<String>,

    /// Unit system (metric, imperial)
    #[arg(short, long)]
    units: Option<Units>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OWM_API_KEY")]
    api_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a one-shot weather update and exit
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so the dashboard rendering on stdout stays intact
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load();
    let units = config::resolve_units(cli.units, &config);
    let api_key = config::resolve_api_key(cli.api_key, &config).context(
        "no API key configured; pass --api-key, set OWM_API_KEY, or add api_key to config.toml",
    )?;
    let city = cli.city.unwrap_or_else(|| config.initial_city());

    match cli.command {
        Some(Commands::Summary) => summary::run(&city, units, api_key).await,
        None => {
            tui::run(tui::TuiOptions {
                city,
                units,
                api_key,
            })
            .await
        }
    }
}
