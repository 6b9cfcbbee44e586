//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_leaderboard_sort() -> String {
    "wins".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Leaderboard key used when none is given (`wins` or `win_pct`).
    #[serde(default = "default_leaderboard_sort")]
    pub leaderboard_sort: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            leaderboard_sort: default_leaderboard_sort(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.leaderboard_sort, "wins");
    }
}
