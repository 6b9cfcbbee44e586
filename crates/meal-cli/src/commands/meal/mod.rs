use crate::cli::GlobalFlags;
use crate::cli::subcommands::MealCommands;
use crate::context::AppContext;

mod create;
mod delete;
mod get;
mod list;

/// Handle `mealmax meal`.
pub async fn handle(action: &MealCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MealCommands::Create {
            name,
            cuisine,
            price,
            difficulty,
        } => create::run(name, cuisine, *price, difficulty, ctx, flags).await,
        MealCommands::Get { id, name } => get::run(id.as_deref(), name.as_deref(), ctx, flags).await,
        MealCommands::Delete { id } => delete::run(id, ctx, flags).await,
        MealCommands::List { include_deleted } => list::run(*include_deleted, ctx, flags).await,
    }
}
