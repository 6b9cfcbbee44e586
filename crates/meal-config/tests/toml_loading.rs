//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use meal_config::{ConfigError, MealConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/meals.db"

[random]
url = "http://localhost:8080/fraction"
timeout_secs = 2

[general]
leaderboard_sort = "win_pct"
"#,
        )?;

        let config: MealConfig = Figment::from(Serialized::defaults(MealConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/meals.db");
        assert_eq!(config.random.url, "http://localhost:8080/fraction");
        assert_eq!(config.random.timeout_secs, 2);
        assert_eq!(config.general.leaderboard_sort, "win_pct");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[random]
timeout_secs = 9
"#,
        )?;

        let config: MealConfig = Figment::from(Serialized::defaults(MealConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.random.timeout_secs, 9);
        assert!(config.random.url.contains("random.org"));
        assert_eq!(config.database.path, "meals.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("MEALMAX_DATABASE__PATH", "from-env.db");

        let config: MealConfig = Figment::from(Serialized::defaults(MealConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEALMAX_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_local_config_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mealmax")?;
        jail.create_file(
            ".mealmax/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = MealConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn load_rejects_zero_timeout_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("MEALMAX_RANDOM__TIMEOUT_SECS", "0");

        let err = MealConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_value_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("MEALMAX_RANDOM__TIMEOUT_SECS", "soon");

        let err = MealConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
