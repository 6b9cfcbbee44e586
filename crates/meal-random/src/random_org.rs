//! random.org decimal-fraction client.
//!
//! One GET per draw against an endpoint that answers with a single decimal
//! fraction in plain text. Nothing is retried or cached: a failed request
//! is reported to the caller as-is.

use std::time::Duration;

use meal_config::RandomConfig;

use crate::RandomSource;
use crate::error::RandomError;
use crate::http::{check_response, parse_fraction};

/// HTTP client for the random.org decimal-fractions endpoint.
pub struct RandomOrgClient {
    http: reqwest::Client,
    url: String,
}

impl RandomOrgClient {
    /// Create a client for `url` with a hard per-request deadline.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Transport` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mealmax/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Create a client from the `[random]` config section.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Transport` if the HTTP client cannot be built.
    pub fn from_config(config: &RandomConfig) -> Result<Self, RandomError> {
        Self::new(config.url.clone(), config.timeout())
    }

    /// Create a client against the public random.org endpoint with the
    /// default deadline.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Transport` if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, RandomError> {
        Self::from_config(&RandomConfig::default())
    }

    /// The endpoint this client queries.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<f64, RandomError> {
        let resp = self.http.get(&self.url).send().await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;
        parse_fraction(&body)
    }
}

impl RandomSource for RandomOrgClient {
    async fn draw(&self) -> Result<f64, RandomError> {
        tracing::info!(url = %self.url, "fetching random number");
        match self.fetch().await {
            Ok(value) => {
                tracing::info!(value, "received random number");
                Ok(value)
            }
            Err(e) => {
                tracing::error!(error = %e, "random number request failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_url() {
        let config = RandomConfig {
            url: "http://localhost:9/fraction".to_string(),
            timeout_secs: 1,
        };
        let client = RandomOrgClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://localhost:9/fraction");
    }

    #[test]
    fn defaults_point_at_random_org() {
        let client = RandomOrgClient::with_defaults().unwrap();
        assert!(client.url().starts_with("https://www.random.org/"));
    }

    #[tokio::test]
    #[ignore = "requires network access to random.org"]
    async fn live_draw_is_a_fraction() {
        let client = RandomOrgClient::with_defaults().unwrap();
        let value = client.draw().await.unwrap();
        assert!((0.0..1.0).contains(&value));
    }
}
