use anyhow::Context;
use meal_config::MealConfig;
use meal_db::store::MealStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: MealStore,
    pub config: MealConfig,
}

impl AppContext {
    /// Open the meal store named by `config.database.path`.
    pub async fn init(config: MealConfig) -> anyhow::Result<Self> {
        let path = config.database.path.as_str();
        if let Some(parent) = std::path::Path::new(path).parent()
            && !config.database.is_in_memory()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create database directory {}", parent.display()))?;
        }

        let store = MealStore::new_local(path)
            .await
            .with_context(|| format!("failed to open meal database at {path}"))?;
        tracing::debug!(path, "meal store ready");
        Ok(Self { store, config })
    }
}
