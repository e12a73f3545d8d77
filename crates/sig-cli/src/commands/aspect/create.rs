use sig_core::enums::AspectType;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    signal_id: i64,
    aspect_type: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let aspect_type: AspectType = aspect_type.parse()?;
    let aspect = ctx.service.create_aspect(signal_id, aspect_type).await?;
    output(&aspect, flags.format)
}
