use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(include_deleted: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let meals = ctx.store.list(include_deleted).await?;
    output(&meals, flags.format)
}
