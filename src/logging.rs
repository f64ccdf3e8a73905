//! Logging setup for the browser
//!
//! `tracing` events from every crate fall through to the `log` facade (no
//! subscriber is installed in the browser), and `console_log` prints them to
//! the developer console. The level comes from `[logging] level` in
//! `site.toml`.

use portfolio_core::{Error, LogLevel, Result};

/// Install the console logger.
pub fn init(level: LogLevel) -> Result<()> {
    console_log::init_with_level(to_log_level(level)).map_err(|e| Error::logger(e.to_string()))?;

    tracing::info!("Portfolio starting (log level {:?})", level);
    Ok(())
}

fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(to_log_level(LogLevel::default()), log::Level::Info);
        assert_eq!(to_log_level(LogLevel::Trace), log::Level::Trace);
        assert_eq!(to_log_level(LogLevel::Error), log::Level::Error);
    }
}
