mod geocode;
mod juso;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::geocode::GeocodeArgs;
use crate::juso::JusoCommands;

#[derive(Debug, Parser)]
#[command(name = "kraddr")]
#[command(about = "Korean road-name address search and coordinate lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search road-name addresses (Juso)
    Juso {
        #[command(subcommand)]
        command: JusoCommands,
    },
    /// Look up coordinates for an address (`VWorld`)
    Geocode(GeocodeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` must be loaded before parsing so clap's `env` fallbacks see it.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = kraddr_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Juso { command } => juso::run(command, &config).await,
        Commands::Geocode(args) => geocode::run(args, &config).await,
    }
}

#[cfg(test)]
mod tests;
