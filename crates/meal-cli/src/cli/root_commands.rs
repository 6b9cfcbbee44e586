use clap::{Args, Subcommand};

use crate::cli::subcommands::MealCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Meal catalog.
    Meal {
        #[command(subcommand)]
        action: MealCommands,
    },
    /// Meals ranked by wins or win percentage.
    Leaderboard(LeaderboardArgs),
    /// Stage two meals by name and battle them.
    Battle(BattleArgs),
    /// Remove every meal from the store.
    Clear(ClearArgs),
    /// Check that the meal store is reachable.
    DbCheck,
}

#[derive(Clone, Debug, Args)]
pub struct LeaderboardArgs {
    /// wins or win_pct (defaults to general.leaderboard_sort)
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BattleArgs {
    /// Name of the first combatant.
    pub first: String,
    /// Name of the second combatant.
    pub second: String,
    /// Use this value instead of asking random.org.
    #[arg(long)]
    pub draw: Option<f64>,
}

#[derive(Clone, Debug, Args)]
pub struct ClearArgs {
    /// Confirm removal of all meals.
    #[arg(long)]
    pub yes: bool,
}
