mod create;
mod get;
mod set_state;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AspectCommands;
use crate::context::AppContext;

/// Handle `sigctl aspect`.
pub async fn handle(
    action: &AspectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AspectCommands::Create {
            signal,
            aspect_type,
        } => create::run(*signal, aspect_type, ctx, flags).await,
        AspectCommands::Get { id } => get::run(*id, ctx, flags).await,
        AspectCommands::On { id } => set_state::run(*id, true, ctx, flags).await,
        AspectCommands::Off { id } => set_state::run(*id, false, ctx, flags).await,
    }
}
