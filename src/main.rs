//! # Plantventory - server entry point
//!
//! 1. Parse the command line
//! 2. Initialize tracing (`RUST_LOG`, default `info`)
//! 3. Load and validate configuration
//! 4. Build handler state (identity provider strategy, profile directory)
//! 5. Serve the API and the UI bundle until Ctrl+C

#![forbid(unsafe_code)]

mod cli;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use plantventory_core::AppConfig;
use plantventory_web::{AppState, create_app, run_server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::CheckConfig => {
            info!("configuration is valid");
            Ok(())
        }
        Commands::Serve { bind, static_dir } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            if let Some(static_dir) = static_dir {
                config.server.static_dir = static_dir;
            }
            config
                .validate()
                .context("Invalid command line overrides")?;
            serve(&config).await
        }
    }
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => {
            info!("no configuration file given, using defaults");
            AppConfig::default()
        }
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn serve(config: &AppConfig) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .context("Invalid bind address")?;

    let state = AppState::from_config(config).context("Failed to build application state")?;
    let app = create_app(state, &config.server.static_dir);

    info!(
        static_dir = %config.server.static_dir.display(),
        "Plantventory starting"
    );
    run_server(addr, app).await.context("Server failed")?;

    info!("Plantventory stopped gracefully");
    Ok(())
}
