use clap::Subcommand;

/// Meal catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MealCommands {
    /// Add a meal to the catalog.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cuisine: String,
        #[arg(long)]
        price: f64,
        /// LOW, MED, or HIGH
        #[arg(long)]
        difficulty: String,
    },
    /// Show one meal, by ID or by name.
    Get {
        #[arg(required_unless_present = "name")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,
    },
    /// Soft-delete a meal by ID.
    Delete { id: String },
    /// List meals ordered by name.
    List {
        /// Include soft-deleted meals.
        #[arg(long)]
        include_deleted: bool,
    },
}
