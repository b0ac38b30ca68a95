//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM: &str = "http://localhost:5000";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("MEDCORE_UPSTREAM must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Content API origin without a trailing slash.
    pub upstream: String,
    pub max_upload_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MEDCORE_UPSTREAM`: default `http://localhost:5000`
    /// - `MEDCORE_MAX_UPLOAD_MB`: default 16
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream = parse_upstream(lookup("MEDCORE_UPSTREAM").as_deref())?;
        let max_upload_mb = parse_or("MEDCORE_MAX_UPLOAD_MB", lookup("MEDCORE_MAX_UPLOAD_MB"), DEFAULT_MAX_UPLOAD_MB)?;
        if max_upload_mb == 0 {
            return Err(ConfigError::Invalid { var: "MEDCORE_MAX_UPLOAD_MB", value: "0".into() });
        }
        Ok(Self { port, upstream, max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_UPSTREAM);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::UpstreamScheme(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}
