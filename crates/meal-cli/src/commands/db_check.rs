use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mealmax db-check`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let live_meals = ctx.store.health_check().await?;
    output(
        &json!({
            "database": "healthy",
            "path": ctx.config.database.path,
            "live_meals": live_meals,
        }),
        flags.format,
    )
}
