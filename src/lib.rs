//! Comment-Scout: a comment wall watcher
//!
//! This crate scans the public comment walls of a set of profiles, looking for
//! comments written by one profile owner that mention any configured keyword
//! (plain text or emoticon labels), and reports every hit with the page a
//! human would find it on.

pub mod config;
pub mod crawler;
pub mod output;
pub mod profile;
pub mod state;

use thiserror::Error;

/// Main error type for Comment-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Failed to resolve profiles: {0}")]
    Resolve(#[from] profile::ResolveError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Comment-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{page_of, Coordinator};
pub use profile::{FilterSpec, ProfileId, ScanList};
pub use state::PaginationState;
