use meal_battle::BattleEngine;
use meal_core::entities::BattleOutcome;
use meal_random::{FixedRandom, RandomOrgClient, RandomSource};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BattleArgs;
use crate::context::AppContext;
use crate::output::output;

/// Flattened battle result for display.
#[derive(Debug, Serialize)]
struct BattleReport {
    winner: String,
    loser: String,
    first_score: f64,
    second_score: f64,
    delta: f64,
    draw: f64,
}

impl From<BattleOutcome> for BattleReport {
    fn from(outcome: BattleOutcome) -> Self {
        Self {
            winner: outcome.winner.name,
            loser: outcome.loser.name,
            first_score: outcome.first_score,
            second_score: outcome.second_score,
            delta: outcome.delta,
            draw: outcome.draw,
        }
    }
}

/// Handle `mealmax battle`.
pub async fn handle(args: &BattleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = match args.draw {
        Some(value) => {
            if !(0.0..1.0).contains(&value) {
                anyhow::bail!("--draw must be in [0, 1), got {value}");
            }
            fight(ctx, FixedRandom(value), args).await?
        }
        None => {
            let client = RandomOrgClient::from_config(&ctx.config.random)?;
            fight(ctx, client, args).await?
        }
    };
    output(&BattleReport::from(outcome), flags.format)
}

async fn fight<R: RandomSource>(
    ctx: &AppContext,
    random: R,
    args: &BattleArgs,
) -> anyhow::Result<BattleOutcome> {
    let mut engine = BattleEngine::new(&ctx.store, random);
    engine.stage_by_name(&args.first).await?;
    engine.stage_by_name(&args.second).await?;
    Ok(engine.battle_detailed().await?)
}
