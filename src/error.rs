// src/error.rs

//! Unified error handling for the exporter.

use std::fmt;

use thiserror::Error;

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Every variant aborts the in-progress crawl: a malformed timestamp or an
/// unexpected markup shape signals that the site's unversioned page contract
/// has changed, and a partial export is worse than a visible halt.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (network error or non-success status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Timestamp text matched neither of the site's date layouts
    #[error("Unparseable timestamp: '{input}'")]
    DateFormat { input: String },

    /// Expected element or attribute absent from the score grid markup
    #[error("Unexpected markup shape in {context}: {message}")]
    MarkupShape { context: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a date-format error.
    pub fn date_format(input: impl Into<String>) -> Self {
        Self::DateFormat {
            input: input.into(),
        }
    }

    /// Create a markup-shape error with context.
    pub fn markup(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::MarkupShape {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
