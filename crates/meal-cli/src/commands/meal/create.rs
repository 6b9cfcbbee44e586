use meal_core::enums::Difficulty;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    cuisine: &str,
    price: f64,
    difficulty: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let difficulty = difficulty.parse::<Difficulty>()?;
    let id = ctx.store.create(name, cuisine, price, difficulty).await?;
    let meal = ctx.store.get_by_id(&id).await?;
    output(&meal, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::context::test_support::memory_context;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            db: None,
        }
    }

    #[tokio::test]
    async fn creates_meal() {
        let ctx = memory_context().await;
        run("Pasta", "Italian", 10.0, "MED", &ctx, &flags()).await.unwrap();

        let meal = ctx.store.get_by_name("Pasta").await.unwrap();
        assert_eq!(meal.difficulty, Difficulty::Med);
        assert_eq!(meal.battles, 0);
    }

    #[tokio::test]
    async fn rejects_unknown_difficulty_before_insert() {
        let ctx = memory_context().await;
        let err = run("Pasta", "Italian", 10.0, "EXTREME", &ctx, &flags())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid difficulty level: EXTREME. Must be 'LOW', 'MED', or 'HIGH'."
        );
        assert_eq!(ctx.store.health_check().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_negative_price() {
        let ctx = memory_context().await;
        let err = run("Pasta", "Italian", -10.0, "LOW", &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("-10"));
    }
}
