//! # App Error Types
//!
//! Errors raised by the CLI layer, wrapping core errors.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Input       │  │       Core              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigLoad     │  │  InputClosed    │  │  Core(CoreError)        │ │
//! │  │  InvalidConfig  │  │  CartFile       │  │  Validation             │ │
//! │  │  ConfigParse    │  │  Io             │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tally_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

/// CLI error type.
#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to read the config file.
    #[error("Failed to load config {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::TallyConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but its values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Standard input ended before every product was answered.
    #[error("Input ended while waiting for {0}")]
    InputClosed(String),

    /// Cart file could not be read or parsed.
    #[error("Failed to read cart file {path}: {reason}")]
    CartFile { path: PathBuf, reason: String },

    /// Terminal / stream I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // Core Errors
    // =========================================================================
    /// Pricing or catalog error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Input validation error.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
