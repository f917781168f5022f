//! Content-service configuration parsed from environment variables.

use std::path::PathBuf;

use super::types::CmsError;

pub const DEFAULT_FIXTURE_DIR: &str = "content";
pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmsProviderKind {
    Http,
    Fixture,
}

impl CmsProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Fixture => "fixture",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where collection records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmsSourceConfig {
    Http { base_url: String, api_key: Option<String>, timeouts: CmsTimeouts },
    Fixture { dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub source: CmsSourceConfig,
}

impl CmsConfig {
    #[must_use]
    pub fn provider(&self) -> CmsProviderKind {
        match self.source {
            CmsSourceConfig::Http { .. } => CmsProviderKind::Http,
            CmsSourceConfig::Fixture { .. } => CmsProviderKind::Fixture,
        }
    }

    /// Build typed CMS config from environment variables.
    ///
    /// Optional:
    /// - `CMS_PROVIDER`: `http` (default) or `fixture`
    /// - `CMS_BASE_URL`: content service root; required for `http`
    /// - `CMS_API_KEY_ENV`: names the env var holding a bearer token
    /// - `CMS_FIXTURE_DIR`: default `content`
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider, a missing base URL, or a
    /// key variable that names an unset env var.
    pub fn from_env() -> Result<Self, CmsError> {
        let provider = parse_provider(std::env::var("CMS_PROVIDER").ok().as_deref())?;

        let source = match provider {
            CmsProviderKind::Http => {
                let base_url = std::env::var("CMS_BASE_URL")
                    .map_err(|_| CmsError::MissingConfig { var: "CMS_BASE_URL".into() })?
                    .trim_end_matches('/')
                    .to_string();
                let api_key = match std::env::var("CMS_API_KEY_ENV") {
                    Ok(key_var) => {
                        Some(std::env::var(&key_var).map_err(|_| CmsError::MissingConfig { var: key_var.clone() })?)
                    }
                    Err(_) => None,
                };
                let timeouts = CmsTimeouts {
                    request_secs: env_parse_u64("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
                    connect_secs: env_parse_u64("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
                };
                CmsSourceConfig::Http { base_url, api_key, timeouts }
            }
            CmsProviderKind::Fixture => {
                let dir = std::env::var("CMS_FIXTURE_DIR").unwrap_or_else(|_| DEFAULT_FIXTURE_DIR.to_string());
                CmsSourceConfig::Fixture { dir: PathBuf::from(dir) }
            }
        };

        Ok(Self { source })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<CmsProviderKind, CmsError> {
    match raw.unwrap_or("http") {
        "http" => Ok(CmsProviderKind::Http),
        "fixture" => Ok(CmsProviderKind::Fixture),
        other => Err(CmsError::ConfigParse(format!("unknown CMS_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
