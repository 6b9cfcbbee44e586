use anyhow::Context;
use meal_config::MealConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env` included) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MealConfig> {
    load_dotenv()?;
    let mut config = MealConfig::load().context("failed to load mealmax config")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

/// Load `.env` from the current directory or a parent. A missing file is fine.
fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(anyhow::Error::new(error).context("failed to load .env file")),
    }
}

fn apply_overrides(config: &mut MealConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path, "database path overridden from command line");
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: db.map(str::to_string),
        }
    }

    #[test]
    fn db_flag_overrides_config_path() {
        let mut config = MealConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_flag_keeps_config_path() {
        let mut config = MealConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, "meals.db");
    }
}
