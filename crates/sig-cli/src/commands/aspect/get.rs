use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let aspect = ctx.service.get_aspect(id).await?;
    output(&aspect, flags.format)
}
