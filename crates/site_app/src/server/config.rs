//! Server settings, read from an optional RON file.
//!
//! Every field has a default, so a missing file or a file naming only a few
//! fields is fine:
//!
//! ```ron
//! (
//!     listen_addr: "127.0.0.1:3000",
//!     convex_url: "https://happy-otter-123.convex.cloud",
//!     log: (destination: Both, level: "debug"),
//! )
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use site_engine::{ConvexSettings, EngineSettings, FetchSettings};
use site_logging::{site_info, LogDestination};
use thiserror::Error;

pub const DEFAULT_JOBS_API_URL: &str = "https://sheetdb.io/api/v1/ydla7z4z7edks";
pub const DEFAULT_BUDDY_FINDER_URL: &str = "https://pmcollective.tech";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub listen_addr: String,
    pub jobs_api_url: String,
    /// Convex deployment URL. Empty leaves the events page in its error state.
    pub convex_url: String,
    pub events_query: String,
    pub registration_mutation: String,
    pub buddy_finder_url: String,
    /// How long a page waits for its data before rendering the loading state.
    pub render_deadline_ms: u64,
    /// Refresh interval advertised by the loading state.
    pub loading_refresh_secs: u32,
    pub fetch: FetchConfig,
    pub log: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let convex = ConvexSettings::default();
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            jobs_api_url: DEFAULT_JOBS_API_URL.to_string(),
            convex_url: convex.url,
            events_query: convex.events_query,
            registration_mutation: convex.registration_mutation,
            buddy_finder_url: DEFAULT_BUDDY_FINDER_URL.to_string(),
            render_deadline_ms: 8_000,
            loading_refresh_secs: 3,
            fetch: FetchConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Settings {
    pub fn render_deadline(&self) -> Duration {
        Duration::from_millis(self.render_deadline_ms)
    }

    /// Upstream requests must give up before the page stops waiting for them,
    /// otherwise a hung upstream never surfaces as an error.
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch.request_timeout_ms >= self.render_deadline_ms {
            return Err(format!(
                "fetch.request_timeout_ms ({}) must be below render_deadline_ms ({})",
                self.fetch.request_timeout_ms, self.render_deadline_ms
            ));
        }
        Ok(())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            fetch: self.fetch.to_fetch_settings(),
            jobs_api_url: self.jobs_api_url.clone(),
            convex: ConvexSettings {
                url: self.convex_url.clone(),
                events_query: self.events_query.clone(),
                registration_mutation: self.registration_mutation.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let defaults = FetchSettings::default();
        Self {
            connect_timeout_ms: defaults.connect_timeout.as_millis() as u64,
            request_timeout_ms: defaults.request_timeout.as_millis() as u64,
            max_bytes: defaults.max_bytes,
        }
    }
}

impl FetchConfig {
    pub fn to_fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogTarget {
    File,
    #[default]
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub destination: LogTarget,
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogTarget::Terminal,
            level: "info".to_string(),
            file: PathBuf::from("./site.log"),
        }
    }
}

/// Loads settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let settings = parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    settings.validate().map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    site_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

pub fn parse(content: &str) -> Result<Settings, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_sheet() {
        let settings = Settings::default();
        assert_eq!(settings.jobs_api_url, DEFAULT_JOBS_API_URL);
        assert_eq!(settings.events_query, "events:getPublishedEvents");
        assert!(settings.convex_url.is_empty());
        assert_eq!(settings.render_deadline(), Duration::from_secs(8));
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn request_timeout_must_undercut_render_deadline() {
        let settings = parse("(render_deadline_ms: 4000, fetch: (request_timeout_ms: 4000))").unwrap();
        let message = settings.validate().unwrap_err();
        assert!(message.contains("render_deadline_ms"), "{message}");
    }

    #[test]
    fn engine_settings_carry_fetch_limits() {
        let settings = parse("(fetch: (request_timeout_ms: 1500, max_bytes: 2048))").unwrap();
        let engine = settings.engine_settings();
        assert_eq!(engine.fetch.request_timeout, Duration::from_millis(1500));
        assert_eq!(engine.fetch.max_bytes, 2048);
        assert_eq!(engine.fetch.connect_timeout, Duration::from_secs(5));
    }
}
