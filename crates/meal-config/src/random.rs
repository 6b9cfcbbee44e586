//! Random number service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default endpoint: one decimal fraction with two digits, plain text.
pub const DEFAULT_RANDOM_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

fn default_url() -> String {
    DEFAULT_RANDOM_URL.to_string()
}

/// Default request deadline in seconds.
const fn default_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RandomConfig {
    /// Endpoint returning a single decimal fraction as plain text.
    #[serde(default = "default_url")]
    pub url: String,

    /// Hard deadline for the request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RandomConfig {
    /// The request deadline as a `Duration`.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
