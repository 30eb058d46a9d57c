//! Configuration module
//!
//! `ApiTarget` is the fixed record the entry point prints.
//! `ProbeConfig` carries the knobs of the live probe, read from env.

use std::io::Write;
use std::time::Duration;
use tracing::debug;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    BASE_URL, DEFAULT_PROBE_TIMEOUT_SECS, END_POINT, ENV_BASE_URL, ENV_TIMEOUT_SECS, STATUS_CODE,
};

/// Fixed API target: service root, path and the status it should answer with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    pub base_url: String,
    pub end_point: String,
    pub status_code: u16,
}

impl Default for ApiTarget {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            end_point: END_POINT.to_string(),
            status_code: STATUS_CODE,
        }
    }
}

impl ApiTarget {
    /// Same endpoint and status, different root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full request URL
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.end_point)
    }

    /// The printed lines, in declaration order
    pub fn lines(&self) -> [String; 3] {
        [
            self.base_url.clone(),
            self.end_point.clone(),
            self.status_code.to_string(),
        ]
    }

    /// Write every field on its own line and flush
    pub fn render<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        debug!("Rendered target {}", self.url());
        Ok(())
    }
}

/// Configuration for the live probe
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Base URL to probe (defaults to the fixed target)
    pub base_url: String,
    /// Timeout for the whole request
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

impl ProbeConfig {
    /// Load from process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.is_empty()) {
            let host = match url
                .strip_prefix("http://")
                .or_else(|| url.strip_prefix("https://"))
            {
                Some(rest) => rest.trim_end_matches('/'),
                None => {
                    return Err(AppError::invalid_config(format!(
                        "{} must start with http:// or https://, got {:?}",
                        ENV_BASE_URL, url
                    )))
                }
            };
            if host.is_empty() {
                return Err(AppError::invalid_config(format!(
                    "{} has no host after the scheme: {:?}",
                    ENV_BASE_URL, url
                )));
            }
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::invalid_config(format!("{} is not a number: {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
            if secs == 0 {
                return Err(AppError::invalid_config(format!(
                    "{} must be greater than zero",
                    ENV_TIMEOUT_SECS
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// The fixed target, re-rooted at the configured base URL
    pub fn target(&self) -> ApiTarget {
        ApiTarget::default().with_base_url(self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_target() {
        let target = ApiTarget::default();
        assert_eq!(target.base_url, "https://reqres.in");
        assert_eq!(target.end_point, "/api/users");
        assert_eq!(target.status_code, 200);
        assert_eq!(target.url(), "https://reqres.in/api/users");
    }

    #[test]
    fn test_render_exact_output() {
        let mut out = Vec::new();
        ApiTarget::default().render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://reqres.in\n/api/users\n200\n"
        );
    }

    #[test]
    fn test_probe_config_defaults() {
        let config = ProbeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS));
        assert_eq!(config.target(), ApiTarget::default());
    }

    #[test]
    fn test_probe_config_overrides() {
        let config = ProbeConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://127.0.0.1:8080/"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.target().url(), "http://127.0.0.1:8080/api/users");
    }

    #[test]
    fn test_probe_config_rejects_bad_values() {
        let bad_url = ProbeConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "reqres.in")]));
        assert_eq!(bad_url.unwrap_err().code, ErrorCode::ConfigInvalidValue);

        let no_host = ProbeConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "http://")]));
        assert_eq!(no_host.unwrap_err().code, ErrorCode::ConfigInvalidValue);

        let slashes_only = ProbeConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "https:///")]));
        assert_eq!(slashes_only.unwrap_err().code, ErrorCode::ConfigInvalidValue);

        let bad_timeout = ProbeConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert_eq!(bad_timeout.unwrap_err().code, ErrorCode::ConfigInvalidValue);

        let zero_timeout = ProbeConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")]));
        assert_eq!(zero_timeout.unwrap_err().code, ErrorCode::ConfigInvalidValue);
    }
}
