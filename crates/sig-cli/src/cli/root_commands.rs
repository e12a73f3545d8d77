use clap::{Args, Subcommand};

use crate::cli::subcommands::{AspectCommands, SignalCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Signal registry.
    Signal {
        #[command(subcommand)]
        action: SignalCommands,
    },
    /// Aspects and their ON/OFF state.
    Aspect {
        #[command(subcommand)]
        action: AspectCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// Listen port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}
