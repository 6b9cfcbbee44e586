use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mealmax clear`.
pub async fn handle(args: &ClearArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to remove all meals without --yes");
    }
    let removed = ctx.store.clear_all().await?;
    output(&json!({ "status": "success", "removed": removed }), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::context::test_support::memory_context;
    use meal_core::enums::Difficulty;

    #[tokio::test]
    async fn clear_needs_confirmation() {
        let ctx = memory_context().await;
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            db: None,
        };
        ctx.store
            .create("Pasta", "Italian", 10.0, Difficulty::Med)
            .await
            .unwrap();

        assert!(handle(&ClearArgs { yes: false }, &ctx, &flags).await.is_err());
        assert_eq!(ctx.store.health_check().await.unwrap(), 1);

        handle(&ClearArgs { yes: true }, &ctx, &flags).await.unwrap();
        assert!(ctx.store.list(true).await.unwrap().is_empty());
    }
}
