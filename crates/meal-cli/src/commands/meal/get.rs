use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: Option<&str>,
    name: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let meal = match (id, name) {
        (Some(id), _) => ctx.store.get_by_id(id).await?,
        (None, Some(name)) => ctx.store.get_by_name(name).await?,
        (None, None) => anyhow::bail!("either a meal ID or --name is required"),
    };
    output(&meal, flags.format)
}
