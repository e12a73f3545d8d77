use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Turn an aspect ON or OFF. A rejected transition surfaces as the command error.
pub async fn run(id: i64, is_on: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let aspect = ctx.service.update_aspect_state(id, is_on).await?;
    output(&aspect, flags.format)
}
