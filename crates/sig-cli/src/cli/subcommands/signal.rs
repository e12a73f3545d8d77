use clap::Subcommand;

/// Signal registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SignalCommands {
    /// Register a signal.
    Create {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// List signals in id order.
    List {
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a signal by ID.
    Get { id: i64 },
    /// Show the ON/OFF state of each of a signal's aspects.
    Aspects { id: i64 },
}
