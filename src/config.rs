//! API configuration, injected explicitly into the HTTP layer.

use crate::error::ConfigError;
use crate::network::{DEFAULT_API_URL, DEMO_KEY_HEADER, PRO_API_URL, PRO_KEY_HEADER};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "COINGECKO_BASE_URL";
pub const ENV_API_KEY: &str = "COINGECKO_API_KEY";
pub const ENV_API_PLAN: &str = "COINGECKO_API_PLAN";

/// CoinGecko subscription plan. Decides the key header and default host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiPlan {
    #[default]
    Demo,
    Pro,
}

impl ApiPlan {
    pub fn key_header(&self) -> &'static str {
        match self {
            Self::Demo => DEMO_KEY_HEADER,
            Self::Pro => PRO_KEY_HEADER,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Demo => DEFAULT_API_URL,
            Self::Pro => PRO_API_URL,
        }
    }
}

impl FromStr for ApiPlan {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "pro" => Ok(Self::Pro),
            other => Err(ConfigError::UnknownPlan(other.to_string())),
        }
    }
}

/// Connection settings for the REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub plan: ApiPlan,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            plan: ApiPlan::Demo,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Read `COINGECKO_API_KEY` (required), `COINGECKO_BASE_URL` and
    /// `COINGECKO_API_PLAN` (optional) from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`], with a caller-provided variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(ENV_API_KEY).ok_or(ConfigError::MissingEnv(ENV_API_KEY))?;
        let plan = match non_empty(ENV_API_PLAN) {
            Some(p) => p.parse()?,
            None => ApiPlan::default(),
        };
        let base_url =
            non_empty(ENV_BASE_URL).unwrap_or_else(|| plan.default_base_url().to_string());

        let config = Self {
            base_url,
            api_key: Some(api_key),
            plan,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("https://") || self.base_url.starts_with("http://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl(self.base_url.clone()))
        }
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_requires_api_key() {
        let err = ApiConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "https://x.test")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingEnv(ENV_API_KEY));
    }

    #[test]
    fn test_from_lookup_blank_key_is_missing() {
        let err = ApiConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingEnv(ENV_API_KEY));
    }

    #[test]
    fn test_from_lookup_defaults_base_url_per_plan() {
        let demo = ApiConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "k")])).unwrap();
        assert_eq!(demo.base_url, DEFAULT_API_URL);
        assert_eq!(demo.plan, ApiPlan::Demo);
        assert_eq!(demo.api_key.as_deref(), Some("k"));

        let pro = ApiConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_API_PLAN, "Pro"),
        ]))
        .unwrap();
        assert_eq!(pro.base_url, PRO_API_URL);
        assert_eq!(pro.plan.key_header(), "x-cg-pro-api-key");
    }

    #[test]
    fn test_from_lookup_rejects_bad_url_and_plan() {
        let err = ApiConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_BASE_URL, "api.coingecko.com"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));

        let err = ApiConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_API_PLAN, "enterprise"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::UnknownPlan("enterprise".to_string()));
    }

    #[test]
    fn test_normalized_base_url_trims_slash() {
        let config = ApiConfig {
            base_url: "https://api.coingecko.com/api/v3/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.normalized_base_url(), DEFAULT_API_URL);
    }
}
