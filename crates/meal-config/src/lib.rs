//! # meal-config
//!
//! Layered configuration loading for MealMax using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MEALMAX_*` prefix, `__` as separator)
//! 2. Project-level `.mealmax/config.toml`
//! 3. User-level `~/.config/mealmax/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MEALMAX_DATABASE__PATH` -> `database.path`,
//! `MEALMAX_RANDOM__TIMEOUT_SECS` -> `random.timeout_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use meal_config::MealConfig;
//!
//! let config = MealConfig::load_with_dotenv().expect("config");
//! println!("meals stored at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod random;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use random::{DEFAULT_RANDOM_URL, RandomConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MealConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MealConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on extraction failure and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mealmax/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MEALMAX_").split("__"))
    }

    /// Reject values that would make the store or the random source unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.random.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "random.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.random.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "random.timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        if !matches!(self.general.leaderboard_sort.as_str(), "wins" | "win_pct") {
            return Err(ConfigError::InvalidValue {
                field: "general.leaderboard_sort".into(),
                reason: format!(
                    "'{}' is not one of 'wins', 'win_pct'",
                    self.general.leaderboard_sort
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mealmax").join("config.toml"))
    }
}
