use clap::Subcommand;

/// Aspect commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AspectCommands {
    /// Create an aspect (starts OFF).
    Create {
        #[arg(long)]
        signal: i64,
        /// permissive, restrictive or override
        #[arg(long = "type")]
        aspect_type: String,
    },
    /// Get an aspect by ID.
    Get { id: i64 },
    /// Turn an aspect ON.
    On { id: i64 },
    /// Turn an aspect OFF.
    Off { id: i64 },
}
