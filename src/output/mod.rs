//! Output module for match reports and run statistics
//!
//! This module handles:
//! - The notification sink seam and the match report it carries
//! - Webhook and console sinks
//! - Per-run scan statistics

mod console;
pub mod stats;
mod traits;
mod webhook;

pub use console::ConsoleSink;
pub use stats::{log_summary, RunSummary};
pub use traits::{MatchResult, NotificationSink};
pub use webhook::WebhookSink;
