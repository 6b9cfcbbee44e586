use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Meal { action } => commands::meal::handle(&action, ctx, flags).await,
        Commands::Leaderboard(args) => commands::leaderboard::handle(&args, ctx, flags).await,
        Commands::Battle(args) => commands::battle::handle(&args, ctx, flags).await,
        Commands::Clear(args) => commands::clear::handle(&args, ctx, flags).await,
        Commands::DbCheck => commands::db_check::handle(ctx, flags).await,
    }
}
