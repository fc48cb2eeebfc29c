//! Runtime configuration, read once from the environment at startup.
//!
//! - `TRUSTVERIFY_API_URL`: base URL of the fraud-check service. Unset means
//!   demo-only mode and no requests are made.
//! - `TRUSTVERIFY_CACHE_TTL_SECS`: freshness window for assessments (default 300).
//! - `TRUSTVERIFY_PUBLIC_URL`: origin used in generated embed snippets.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
const DEFAULT_PUBLIC_URL: &str = "https://trustverify.io/";

const ENV_API_URL: &str = "TRUSTVERIFY_API_URL";
const ENV_CACHE_TTL: &str = "TRUSTVERIFY_CACHE_TTL_SECS";
const ENV_PUBLIC_URL: &str = "TRUSTVERIFY_PUBLIC_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be a whole number of seconds, got `{value}`")]
    InvalidDuration { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Option<Url>,
    pub cache_ttl: Duration,
    pub public_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_base_url = non_empty(ENV_API_URL)
            .map(|raw| parse_base_url(ENV_API_URL, &raw))
            .transpose()?;

        let cache_ttl = match non_empty(ENV_CACHE_TTL) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidDuration {
                    var: ENV_CACHE_TTL,
                    value: raw,
                })?,
            None => DEFAULT_CACHE_TTL,
        };

        let public_url = parse_base_url(
            ENV_PUBLIC_URL,
            &non_empty(ENV_PUBLIC_URL).unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string()),
        )?;

        Ok(Self {
            api_base_url,
            cache_ttl,
            public_url,
        })
    }

    pub fn demo_only(&self) -> bool {
        self.api_base_url.is_none()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            public_url: Url::parse(DEFAULT_PUBLIC_URL).expect("default public URL is valid"),
        }
    }
}

/// Parses a base URL, forcing a trailing slash so `join` appends instead of replacing.
fn parse_base_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|source| ConfigError::InvalidUrl { var, source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_demo_mode() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults");
        assert!(config.demo_only());
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn api_url_gets_trailing_slash() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.trustverify.io/v1"),
            (ENV_CACHE_TTL, "60"),
        ]))
        .expect("valid config");
        assert_eq!(
            config.api_base_url.map(|u| u.to_string()),
            Some("https://api.trustverify.io/v1/".to_string())
        );
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_API_URL, "not a url")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_CACHE_TTL, "five minutes")])),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }
}
