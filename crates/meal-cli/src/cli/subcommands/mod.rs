mod meal;

pub use meal::MealCommands;
