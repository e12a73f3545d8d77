use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let signal = ctx.service.create_signal(id, name).await?;
    output(&signal, flags.format)
}
