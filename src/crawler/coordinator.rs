//! Scan coordinator - main scan orchestration logic
//!
//! This module contains the main scan loop that coordinates:
//! - Resolving the profiles to scan (unless a list is preloaded)
//! - Paginating through each profile's comment wall
//! - Matching every comment against the owner and keywords
//! - Handing match reports to the notification sink

use crate::config::{ApiConfig, Config, TargetConfig};
use crate::crawler::fetcher::{build_http_client, CommentSource, HttpCommentSource};
use crate::crawler::locator::page_of;
use crate::crawler::matcher::{author_matches, keyword_matches};
use crate::crawler::paginator::{CommentBatch, CommentPaginator};
use crate::output::{
    log_summary, ConsoleSink, MatchResult, NotificationSink, RunSummary, WebhookSink,
};
use crate::profile::{FilterSpec, FriendResolver, ProfileId, ScanList};
use reqwest::Client;

/// Main scan coordinator structure
pub struct Coordinator {
    target: TargetConfig,
    api: ApiConfig,
    source: Box<dyn CommentSource>,
    sink: Box<dyn NotificationSink>,
}

impl Coordinator {
    /// Creates a coordinator around explicit collaborators
    pub fn new(
        config: &Config,
        source: Box<dyn CommentSource>,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            target: config.target.clone(),
            api: config.api.clone(),
            source,
            sink,
        }
    }

    /// Creates a coordinator talking HTTP to the configured endpoints
    ///
    /// Matches go to the configured webhook, or to stdout without one.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent, config.api.timeout())?;
        Ok(Self::with_client(config, client))
    }

    /// Same as `from_config`, sharing an existing HTTP client
    pub fn with_client(config: &Config, client: Client) -> Self {
        let source = HttpCommentSource::new(client.clone(), config.api.clone());

        let sink: Box<dyn NotificationSink> = match &config.webhook {
            Some(webhook) => Box::new(WebhookSink::new(client, webhook.clone())),
            None => {
                tracing::info!("No webhook configured, printing matches to stdout");
                Box::new(ConsoleSink::stdout())
            }
        };

        Self::new(config, Box::new(source), sink)
    }

    /// Scans every profile of `scan_list`, in order
    ///
    /// A profile that is private or fails only ends its own scan; the run
    /// always continues with the next profile.
    pub async fn run(&mut self, scan_list: &ScanList) -> RunSummary {
        let mut summary = RunSummary::new(scan_list.len());

        for (position, profile) in scan_list.iter().enumerate() {
            tracing::info!(
                "Scanning comments of profile {} ({}/{})",
                profile,
                position + 1,
                scan_list.len()
            );
            self.scan_profile(profile, &mut summary).await;
        }

        tracing::info!("All profiles scanned");
        summary
    }

    /// Runs one profile's pagination to its terminal state
    async fn scan_profile(&mut self, profile: &ProfileId, summary: &mut RunSummary) {
        let mut paginator = CommentPaginator::new(
            self.source.as_ref(),
            profile,
            self.api.page_size,
            self.api.request_delay(),
        );

        while let Some(batch) = paginator.next_batch().await {
            let total = batch
                .total_count
                .map_or_else(|| "?".to_string(), |t| t.to_string());
            tracing::info!(
                "Profile {}: start={}, count={}, progress {}/{}",
                profile,
                batch.offset,
                batch.len(),
                batch.progress(),
                total
            );

            summary.comments_scanned += batch.len() as u64;

            for result in find_matches(&self.target, &self.api, profile, &batch) {
                tracing::info!(
                    "Match on profile {} at comment {} (page {}): {}",
                    result.profile_id,
                    result.index,
                    result.page,
                    result.url
                );
                self.sink.deliver(&result).await;
                summary.matches += 1;
            }
        }

        let state = paginator.state();
        if state.is_error() {
            tracing::warn!("Profile {} skipped: {}", profile, state);
        } else {
            tracing::info!("Profile {} finished: {}", profile, state);
        }
        summary.record_profile(profile.as_str(), state);
    }
}

/// Builds a report for every comment in `batch` by the owner with a keyword
pub fn find_matches(
    target: &TargetConfig,
    api: &ApiConfig,
    profile: &ProfileId,
    batch: &CommentBatch,
) -> Vec<MatchResult> {
    batch
        .comments
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            author_matches(record, &target.owner_reference, target.author_match)
                && keyword_matches(record, target.keywords.as_slice())
        })
        .map(|(position, record)| {
            let index = batch.absolute_index(position);
            let page = page_of(index, api.comments_per_page);
            MatchResult {
                profile_id: profile.to_string(),
                text: record.text.clone(),
                index,
                page,
                url: format!("{}?ctp={}", api.comment_base_url_for(profile.as_str()), page),
            }
        })
        .collect()
}

/// Runs the main scan operation
///
/// 1. Use the preloaded profile list, or resolve the friend list (applying
///    `filter`); a resolution failure aborts the run
/// 2. Scan every profile in order
/// 3. Log the run summary
///
/// # Example
///
/// ```no_run
/// use comment_scout::config::load_config;
/// use comment_scout::crawler::run_scan;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("scout.toml"))?;
/// let summary = run_scan(&config, None).await?;
/// println!("{} matches", summary.matches);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(
    config: &Config,
    filter: Option<&FilterSpec>,
) -> crate::Result<RunSummary> {
    let client = build_http_client(&config.user_agent, config.api.timeout())?;

    let scan_list = if config.target.profiles.is_empty() {
        FriendResolver::new(client.clone(), config.friends_url())
            .resolve(filter)
            .await?
    } else {
        let preloaded = preloaded_scan_list(config);
        tracing::info!("Using {} preloaded profiles", preloaded.len());
        if filter.is_some() {
            tracing::info!("Suffix filter ignored for a preloaded profile list");
        }
        preloaded
    };

    let mut coordinator = Coordinator::with_client(config, client);
    let summary = coordinator.run(&scan_list).await;
    log_summary(&summary);
    Ok(summary)
}

/// The scan list configured in `target.profiles`
///
/// Preloaded lists are scanned as given; the suffix filter only narrows a
/// resolved friend list.
pub fn preloaded_scan_list(config: &Config) -> ScanList {
    config
        .target
        .profiles
        .iter()
        .map(|id| ProfileId::new(id.trim()))
        .collect()
}
