/// Service configuration loader - parses aqbot.toml
///
/// Replaces the original module-level mutable globals (base URLs, referer)
/// with an explicit configuration struct owned by the application entry
/// point and passed into the pipeline. Every field has a default, so the
/// service runs without a config file at all.

use serde::Deserialize;
use std::fs;

use crate::model::LookupError;

/// Runtime configuration for one lookup pipeline instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// PurpleAir bulk snapshot endpoint.
    pub purpleair_url: String,
    /// Nominatim forward-geocoding search endpoint (no query string).
    pub nominatim_url: String,
    /// Identifying string sent as the Referer query parameter, per
    /// Nominatim's usage policy.
    pub referer: String,
    /// Sensors farther than this from the geocoded point are ignored.
    pub radius_miles: f64,
    /// Readings older than this are considered stale and ignored.
    pub max_age_seconds: i64,
    /// Per-request HTTP timeout. The upstream services define none, so the
    /// client must.
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            purpleair_url: "https://www.purpleair.com/data.json".to_string(),
            nominatim_url: "https://nominatim.openstreetmap.org/search".to_string(),
            referer: "https://github.com/aqbot/aqbot_service".to_string(),
            radius_miles: 5.0,
            max_age_seconds: 3600,
            timeout_seconds: 10,
        }
    }
}

/// On-disk shape of aqbot.toml. All keys optional; anything absent keeps
/// its default.
#[derive(Debug, Deserialize)]
struct FileConfig {
    purpleair_url: Option<String>,
    nominatim_url: Option<String>,
    referer: Option<String>,
    radius_miles: Option<f64>,
    max_age_seconds: Option<i64>,
    timeout_seconds: Option<u64>,
}

impl ServiceConfig {
    /// Parses a TOML document, overlaying present keys onto the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, LookupError> {
        let file: FileConfig = toml::from_str(contents)
            .map_err(|e| LookupError::FormatError(format!("aqbot.toml: {}", e)))?;

        let defaults = Self::default();
        Ok(Self {
            purpleair_url: file.purpleair_url.unwrap_or(defaults.purpleair_url),
            nominatim_url: file.nominatim_url.unwrap_or(defaults.nominatim_url),
            referer: file.referer.unwrap_or(defaults.referer),
            radius_miles: file.radius_miles.unwrap_or(defaults.radius_miles),
            max_age_seconds: file.max_age_seconds.unwrap_or(defaults.max_age_seconds),
            timeout_seconds: file.timeout_seconds.unwrap_or(defaults.timeout_seconds),
        })
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &str) -> Result<Self, LookupError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LookupError::FormatError(format!("Failed to read {}: {}", path, e)))?;
        Self::from_toml_str(&contents)
    }

    /// Applies `AQBOT_*` environment variable overrides. These sit above
    /// the config file so deployments can swap endpoints without editing
    /// the file (the original hardcoded both URLs in source).
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("AQBOT_PURPLEAIR_URL") {
            self.purpleair_url = url;
        }
        if let Ok(url) = std::env::var("AQBOT_NOMINATIM_URL") {
            self.nominatim_url = url;
        }
        if let Ok(referer) = std::env::var("AQBOT_REFERER") {
            self.referer = referer;
        }
        self
    }
}

/// Loads configuration for the binary: `.env`, then `aqbot.toml` from the
/// working directory when present (defaults otherwise), then environment
/// overrides. A malformed config file is an error rather than a silent
/// fallback to defaults.
pub fn load() -> Result<ServiceConfig, LookupError> {
    dotenv::dotenv().ok();

    let config = match fs::read_to_string("aqbot.toml") {
        Ok(contents) => ServiceConfig::from_toml_str(&contents)?,
        Err(_) => ServiceConfig::default(),
    };

    Ok(config.apply_env_overrides())
}
