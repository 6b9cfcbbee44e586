use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.delete(id).await?;
    output(&json!({ "status": "success", "deleted": id }), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::context::test_support::memory_context;
    use meal_core::enums::Difficulty;

    #[tokio::test]
    async fn second_delete_reports_deleted() {
        let ctx = memory_context().await;
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            db: None,
        };
        let id = ctx
            .store
            .create("Tacos", "Mexican", 15.0, Difficulty::High)
            .await
            .unwrap();

        run(&id, &ctx, &flags).await.unwrap();
        let err = run(&id, &ctx, &flags).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Meal with ID {id} has been deleted"));
    }
}
