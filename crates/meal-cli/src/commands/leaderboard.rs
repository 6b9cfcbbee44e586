use crate::cli::GlobalFlags;
use crate::cli::root_commands::LeaderboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mealmax leaderboard`.
pub async fn handle(args: &LeaderboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sort = args
        .sort
        .as_deref()
        .unwrap_or(ctx.config.general.leaderboard_sort.as_str());
    let board = ctx.store.leaderboard(sort).await?;
    output(&board, flags.format)
}
