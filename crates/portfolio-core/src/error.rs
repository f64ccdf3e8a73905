//! Error types for the site's internal plumbing
//!
//! None of these ever reach the visitor. They exist so configuration parsing,
//! observer construction and logger setup can propagate failures with `?`
//! up to the point where the page decides to fall back.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Browser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to observe '{target}': {message}")]
    Observer { target: String, message: String },

    #[error("Failed to install logger: {0}")]
    Logger(String),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// `target` names what was being observed: a section id or a reveal wrapper.
    pub fn observer(target: impl ToString, message: impl Into<String>) -> Self {
        Self::Observer {
            target: target.to_string(),
            message: message.into(),
        }
    }

    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger(message.into())
    }
}
