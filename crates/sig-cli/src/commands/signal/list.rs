use crate::cli::GlobalFlags;
use crate::commands::shared::limit::page;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    skip: Option<u32>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (offset, limit) = page(skip, limit, &ctx.config.general);
    let signals = ctx.service.list_signals(offset, limit).await?;
    output(&signals, flags.format)
}
