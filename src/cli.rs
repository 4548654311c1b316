//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plantventory - a chic inventory for your plants
#[derive(Parser, Debug)]
#[command(name = "plantventory")]
#[command(version)]
#[command(about = "Serve the Plantventory landing experience and its session API")]
pub struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true, env = "PLANTVENTORY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind, overriding `server.bind_address`
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory of the compiled UI bundle, overriding `server.static_dir`
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Load and validate the configuration, then exit
    CheckConfig,
}
