//! Configuration for TrackScout
//!
//! Values are resolved in layers: built-in defaults, then
//! `~/.trackscout/config.json` (if present), then `TRACKSCOUT_*` environment
//! variables. The CLI applies its own flags on top of the loaded config.
//!
//! ```json
//! {
//!     "search": { "endpoint": "https://www.beatport.com/search", "timeout_secs": 30 },
//!     "run": { "max_files": 12, "pace_ms": 500, "await_pace": true, "stop_on_error": false }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScoutError};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.beatport.com/search";
pub const DEFAULT_USER_AGENT: &str = concat!("trackscout/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_FILES: usize = 12;
const DEFAULT_PACE_MS: u64 = 500;

const ENV_PREFIX: &str = "TRACKSCOUT";

// ============================================================================
// Sections
// ============================================================================

/// Catalog search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search page URL; the query is sent as the `q` parameter.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every search.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Directory scan settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Maximum number of files processed per run.
    pub max_files: usize,
    /// Delay between consecutive files, in milliseconds.
    pub pace_ms: u64,
    /// Whether the pacing delay is actually slept before the next file.
    pub await_pace: bool,
    /// Whether the first failing file aborts the remaining files.
    pub stop_on_error: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            pace_ms: DEFAULT_PACE_MS,
            await_pace: true,
            stop_on_error: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub run: RunConfig,
}

impl Config {
    /// Default config file location (`~/.trackscout/config.json`).
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trackscout")
            .join("config.json")
    }

    /// Load from the default path, then apply environment overrides.
    ///
    /// Not validated here: CLI flags are layered on top afterwards, so the
    /// caller runs [`Config::validate`] once every source is applied.
    pub fn load() -> Result<Self> {
        Self::load_layered(&Self::path(), |key| std::env::var(key).ok())
    }

    /// File at `path` (or defaults) with environment overrides from `lookup`.
    pub fn load_layered<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_from_path(path)?;
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply `TRACKSCOUT_<SECTION>_<FIELD>` overrides using the given lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));

        if let Some(endpoint) = var("SEARCH_ENDPOINT") {
            self.search.endpoint = endpoint;
        }
        if let Some(agent) = var("SEARCH_USER_AGENT") {
            self.search.user_agent = agent;
        }
        if let Some(raw) = var("SEARCH_TIMEOUT_SECS") {
            self.search.timeout_secs = parse_env("SEARCH_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = var("RUN_MAX_FILES") {
            self.run.max_files = parse_env("RUN_MAX_FILES", &raw)?;
        }
        if let Some(raw) = var("RUN_PACE_MS") {
            self.run.pace_ms = parse_env("RUN_PACE_MS", &raw)?;
        }
        if let Some(raw) = var("RUN_AWAIT_PACE") {
            self.run.await_pace = parse_env("RUN_AWAIT_PACE", &raw)?;
        }
        if let Some(raw) = var("RUN_STOP_ON_ERROR") {
            self.run.stop_on_error = parse_env("RUN_STOP_ON_ERROR", &raw)?;
        }

        Ok(())
    }

    /// Reject values the scan loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.search.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ScoutError::Config(format!(
                "search endpoint must be an http/https URL, got '{}'",
                self.search.endpoint
            )));
        }
        if self.search.timeout_secs == 0 {
            return Err(ScoutError::Config(
                "search timeout must be at least 1 second".to_string(),
            ));
        }
        if self.run.max_files == 0 {
            return Err(ScoutError::Config(
                "max_files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| {
        ScoutError::Config(format!(
            "invalid value '{}' for {}_{}",
            raw, ENV_PREFIX, name
        ))
    })
}
