use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projection = ctx.service.get_signal_aspects(id).await?;
    output(&projection, flags.format)
}
