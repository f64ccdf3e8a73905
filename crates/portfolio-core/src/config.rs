//! Site configuration parsed from `site.toml`
//!
//! The file is embedded into the bundle at compile time; there is no runtime
//! file access. Every key is optional and falls back to the values the page
//! was designed around.

use serde::Deserialize;

use crate::prelude::*;
use crate::theme::Theme;
use crate::watcher::{TieBreak, ViewingBand};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeSettings,
    pub watcher: WatcherSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Theme on every page load
    pub initial: Theme,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WatcherSettings {
    pub top_inset_percent: u8,
    pub bottom_inset_percent: u8,
    pub threshold: f64,
    pub tie_break: TieBreak,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        let band = ViewingBand::default();
        Self {
            top_inset_percent: band.top_inset_percent,
            bottom_inset_percent: band.bottom_inset_percent,
            threshold: band.threshold,
            tie_break: TieBreak::default(),
        }
    }
}

impl WatcherSettings {
    pub fn band(&self) -> Result<ViewingBand> {
        ViewingBand::new(
            self.top_inset_percent,
            self.bottom_inset_percent,
            self.threshold,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl SiteConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.watcher.band()?;
        Ok(config)
    }

    /// Viewing band described by the `[watcher]` table.
    ///
    /// Only configs that passed [`SiteConfig::from_toml_str`] or came from
    /// `Default` reach the page, so this falls back instead of failing.
    pub fn band(&self) -> ViewingBand {
        self.watcher.band().unwrap_or_default()
    }
}

/// Settles a parsed config, falling back to defaults (with a warning) on any
/// error.
///
/// Lets the caller read the log level out of a successful parse before the
/// logger exists, then report a failed one once it does.
pub fn site_config_or_default(parsed: Result<SiteConfig>) -> SiteConfig {
    match parsed {
        Ok(config) => {
            debug!("Loaded site config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("Failed to load site config, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}
