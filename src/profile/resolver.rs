//! Friend list resolution
//!
//! Builds the run's `ScanList` from the owner's friend list page, optionally
//! narrowed by a suffix-digit filter.

use crate::crawler::{extract_profile_ids, fetch_text, FetchError};
use crate::profile::{FilterSpec, ProfileId, ScanList};
use reqwest::Client;
use thiserror::Error;

/// Errors that make a run impossible before any scanning
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not fetch friend list: {0}")]
    Fetch(#[from] FetchError),

    #[error("no profiles found on {url}")]
    NoProfiles { url: String },

    #[error("none of {before} profiles has a last digit in {filter}")]
    AllFiltered { before: usize, filter: String },
}

/// Resolves the profiles to scan from a friend list page
#[derive(Debug, Clone)]
pub struct FriendResolver {
    client: Client,
    friends_url: String,
}

impl FriendResolver {
    pub fn new(client: Client, friends_url: impl Into<String>) -> Self {
        Self {
            client,
            friends_url: friends_url.into(),
        }
    }

    /// Fetches the friend list once and builds the scan list
    ///
    /// # Returns
    ///
    /// * `Ok(ScanList)` - At least one profile to scan
    /// * `Err(ResolveError)` - Page unreachable, or nothing left to scan
    pub async fn resolve(&self, filter: Option<&FilterSpec>) -> Result<ScanList, ResolveError> {
        tracing::info!("Fetching friend list: {}", self.friends_url);
        let html = fetch_text(&self.client, &self.friends_url).await?;
        let all = build_scan_list(&html);

        if all.is_empty() {
            return Err(ResolveError::NoProfiles {
                url: self.friends_url.clone(),
            });
        }

        let Some(filter) = filter else {
            tracing::info!("Friend list resolved: {} profiles", all.len());
            return Ok(all);
        };

        let filtered = all.filtered(filter);
        tracing::info!(
            "Friend list resolved: {} profiles (last digit in {}, {} before filtering)",
            filtered.len(),
            filter,
            all.len()
        );

        if filtered.is_empty() {
            return Err(ResolveError::AllFiltered {
                before: all.len(),
                filter: filter.to_string(),
            });
        }

        Ok(filtered)
    }
}

/// Parses a friend list page into a duplicate-free scan list
pub fn build_scan_list(html: &str) -> ScanList {
    extract_profile_ids(html)
        .into_iter()
        .map(ProfileId::from)
        .collect()
}
