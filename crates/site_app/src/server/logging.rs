//! Logger initialization for the site server.

use log::LevelFilter;

use super::config::LogConfig;

/// Initialize the global logger from the `log` section of the settings.
///
/// An unknown level name falls back to `info`.
pub fn initialize(config: &LogConfig) {
    let level = site_logging::parse_level(&config.level).unwrap_or_else(|| {
        eprintln!(
            "Warning: unknown log level {:?}, using info",
            config.level
        );
        LevelFilter::Info
    });

    site_logging::initialize(config.destination.into(), level, &config.file);
}
