use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::SessionToken;

pub const CURRENT_VERSION: u32 = 1;
pub const DEFAULT_BASE_URL: &str = "http://localhost:9999/lensapi/";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find a config directory for this platform")]
    NoConfigDir,
    #[error("Could not read {path}: {message}")]
    Read { path: String, message: String },
    #[error("Invalid config file {path}: {message}")]
    InvalidFormat { path: String, message: String },
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Could not write {path}: {message}")]
    Write { path: String, message: String },
    #[error("Config file already exists at {0} (use --force to overwrite)")]
    AlreadyExists(String),
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// On-disk layout of `config.toml`. Every setting is optional so a partial
/// file falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub client: ClientSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl ConfigFile {
    /// The file written by `config init`.
    pub fn with_defaults() -> Self {
        Self {
            version: CURRENT_VERSION,
            server: ServerSection {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
            },
            session: SessionSection::default(),
            client: ClientSection {
                poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
                request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            log: LogSection {
                level: Some(DEFAULT_LOG_LEVEL.to_string()),
                file: None,
            },
        }
    }
}

/// Settings given on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub session_id: Option<String>,
    pub user: Option<String>,
}

/// Fully resolved settings: overrides, then the file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub session: Option<SessionToken>,
    pub user: Option<String>,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session: None,
            user: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl ClientConfig {
    pub fn resolve(
        file: Option<&ConfigFile>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_else(|| ConfigFile {
            version: CURRENT_VERSION,
            server: ServerSection::default(),
            session: SessionSection::default(),
            client: ClientSection::default(),
            log: LogSection::default(),
        });

        let base_url = pick(overrides.base_url.clone(), file.server.base_url)
            .unwrap_or(defaults.base_url);
        validate_base_url(&base_url)?;

        let session = SessionToken::from_optional(pick(
            overrides.session_id.clone(),
            file.session.session_id,
        ));
        let user = pick(overrides.user.clone(), file.session.user);

        let poll_interval_ms = file
            .client
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.poll_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        let request_timeout_secs = file
            .client
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            base_url,
            session,
            user,
            poll_interval: Duration::from_millis(poll_interval_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_level: file.log.level.unwrap_or(defaults.log_level),
            log_file: file.log.file,
        })
    }

    /// Human-readable summary for `config show`. The session id is redacted.
    pub fn describe(&self) -> String {
        let session = self
            .session
            .as_ref()
            .map_or_else(|| "(not set)".to_string(), SessionToken::redacted);
        let log_file = self
            .log_file
            .as_ref()
            .map_or_else(|| "(default)".to_string(), |p| p.display().to_string());
        [
            format!("base_url = {}", self.base_url),
            format!("session_id = {session}"),
            format!("user = {}", self.user.as_deref().unwrap_or("(not set)")),
            format!("poll_interval_ms = {}", self.poll_interval.as_millis()),
            format!("request_timeout_secs = {}", self.request_timeout.as_secs()),
            format!("log.level = {}", self.log_level),
            format!("log.file = {log_file}"),
        ]
        .join("\n")
    }
}

/// First non-blank value wins.
fn pick(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    non_blank(preferred).or_else(|| non_blank(fallback))
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        message,
    };
    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
