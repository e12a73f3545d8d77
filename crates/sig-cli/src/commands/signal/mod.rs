mod aspects;
mod create;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SignalCommands;
use crate::context::AppContext;

/// Handle `sigctl signal`.
pub async fn handle(
    action: &SignalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SignalCommands::Create { id, name } => create::run(*id, name, ctx, flags).await,
        SignalCommands::List { skip, limit } => list::run(*skip, *limit, ctx, flags).await,
        SignalCommands::Get { id } => get::run(*id, ctx, flags).await,
        SignalCommands::Aspects { id } => aspects::run(*id, ctx, flags).await,
    }
}
