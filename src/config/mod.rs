//! Configuration module for Comment-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use comment_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Watching comments by: {}", config.target.owner_reference);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, AuthorMatch, Config, TargetConfig, UserAgentConfig, WebhookConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

/// Placeholder substituted with a profile id in URL templates
pub const PROFILE_ID_PLACEHOLDER: &str = "{profile_id}";
