//! Per-run scan statistics
//!
//! Counters live only for the duration of one run; nothing is persisted.

use crate::state::PaginationState;

/// Outcome counters of one scan run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Profiles in the scan list
    pub profiles_total: usize,

    /// Profiles listed to the end
    pub profiles_completed: usize,

    /// Profiles that were private or failed
    pub profiles_failed: usize,

    /// Comments inspected across all profiles
    pub comments_scanned: u64,

    /// Matches handed to the notification sink
    pub matches: u64,

    /// Ids of the profiles that ended in error, in scan order
    pub failed_profiles: Vec<String>,
}

impl RunSummary {
    pub fn new(profiles_total: usize) -> Self {
        Self {
            profiles_total,
            ..Self::default()
        }
    }

    /// Records the terminal state of one profile
    pub fn record_profile(&mut self, profile_id: &str, state: &PaginationState) {
        if state.is_success() {
            self.profiles_completed += 1;
        } else if state.is_error() {
            self.profiles_failed += 1;
            self.failed_profiles.push(profile_id.to_string());
        }
    }

    /// Share of profiles listed to the end, as a percentage
    pub fn completion_rate(&self) -> f64 {
        if self.profiles_total == 0 {
            return 0.0;
        }
        (self.profiles_completed as f64 / self.profiles_total as f64) * 100.0
    }
}

/// Logs the summary of a finished run
pub fn log_summary(summary: &RunSummary) {
    tracing::info!(
        "Profiles: {} total, {} completed, {} private or failed ({:.1}% completed)",
        summary.profiles_total,
        summary.profiles_completed,
        summary.profiles_failed,
        summary.completion_rate()
    );
    tracing::info!(
        "Comments scanned: {}, matches reported: {}",
        summary.comments_scanned,
        summary.matches
    );
    if !summary.failed_profiles.is_empty() {
        tracing::info!(
            "Profiles not fully scanned: {}",
            summary.failed_profiles.join(", ")
        );
    }
}
