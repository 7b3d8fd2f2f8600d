//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Archive download settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Pipeline behavior settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Default file locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.base_url.trim().is_empty() {
            return Err(AppError::validation("fetch.base_url is empty"));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.pipeline.prefetch == 0 {
            return Err(AppError::validation("pipeline.prefetch must be > 0"));
        }
        if self.pipeline.flush_every == 0 {
            return Err(AppError::validation("pipeline.flush_every must be > 0"));
        }
        if self.pipeline.work_dir.trim().is_empty() {
            return Err(AppError::validation("pipeline.work_dir is empty"));
        }
        Ok(())
    }
}

/// Archive download settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL the archive identifiers are resolved against
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-archive download timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Pipeline behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// How many downloaded archives may wait for processing
    #[serde(default = "defaults::prefetch")]
    pub prefetch: usize,

    /// Flush the output sink after this many emails
    #[serde(default = "defaults::flush_every")]
    pub flush_every: usize,

    /// Scratch directory for downloaded archives
    #[serde(default = "defaults::work_dir")]
    pub work_dir: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            prefetch: defaults::prefetch(),
            flush_every: defaults::flush_every(),
            work_dir: defaults::work_dir(),
        }
    }
}

/// Default file locations, overridable from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Text file listing archive identifiers, one per line
    #[serde(default = "defaults::wet_list")]
    pub wet_list: String,

    /// Directory for per-worker NDJSON output files
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,

    /// Shared completion ledger
    #[serde(default = "defaults::ledger")]
    pub ledger: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            wet_list: defaults::wet_list(),
            output_dir: defaults::output_dir(),
            ledger: defaults::ledger(),
        }
    }
}

mod defaults {
    // Fetch defaults
    pub fn base_url() -> String {
        "https://data.commoncrawl.org".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; prospector/1.0)".into()
    }
    pub fn timeout() -> u64 {
        120
    }

    // Pipeline defaults
    pub fn prefetch() -> usize {
        3
    }
    pub fn flush_every() -> usize {
        50
    }
    pub fn work_dir() -> String {
        std::env::temp_dir().to_string_lossy().into_owned()
    }

    // Path defaults
    pub fn wet_list() -> String {
        "wet.paths".into()
    }
    pub fn output_dir() -> String {
        "results".into()
    }
    pub fn ledger() -> String {
        "progress.log".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.fetch.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_prefetch() {
        let mut config = Config::default();
        config.pipeline.prefetch = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [pipeline]
            prefetch = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.pipeline.prefetch, 5);
        assert_eq!(config.pipeline.flush_every, 50);
        assert_eq!(config.fetch.timeout_secs, 120);
    }
}
