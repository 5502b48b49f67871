//! Offset/count pagination over one profile's comment wall
//!
//! A `CommentPaginator` is a lazy, finite, non-restartable sequence of
//! batches. It owns the only progress counters of a profile scan (offset and
//! captured total) and drops them when the profile is done.

use crate::crawler::fetcher::CommentSource;
use crate::crawler::parser::{parse_comments, CommentRecord};
use crate::profile::ProfileId;
use crate::state::PaginationState;
use std::time::Duration;

/// One successful offset window of a profile's comments
#[derive(Debug, Clone)]
pub struct CommentBatch {
    /// Offset the window was requested at
    pub offset: usize,

    /// Total captured from the profile's first successful response
    pub total_count: Option<u64>,

    /// Comments of the window, in listing order
    pub comments: Vec<CommentRecord>,
}

impl CommentBatch {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Number of comments listed so far, this batch included
    pub fn progress(&self) -> usize {
        self.offset + self.comments.len()
    }

    /// 1-based absolute index of the comment at `position` in this batch
    pub fn absolute_index(&self, position: usize) -> u64 {
        (self.offset + position + 1) as u64
    }
}

/// Drives the batch requests for one profile
///
/// # State Machine
///
/// | From | Event | To |
/// |------|-------|----|
/// | Start | first request issued | Fetching |
/// | Fetching | full batch, total not reached | Fetching (after delay) |
/// | Fetching | short batch, empty fragment, or total reached | Exhausted |
/// | any active | `success == false` or transport failure | PrivateOrError |
pub struct CommentPaginator<'a> {
    source: &'a dyn CommentSource,
    profile: &'a ProfileId,
    page_size: usize,
    delay: Duration,
    offset: usize,
    total_count: Option<u64>,
    state: PaginationState,
}

impl<'a> CommentPaginator<'a> {
    pub fn new(
        source: &'a dyn CommentSource,
        profile: &'a ProfileId,
        page_size: usize,
        delay: Duration,
    ) -> Self {
        Self {
            source,
            profile,
            page_size: page_size.max(1),
            delay,
            offset: 0,
            total_count: None,
            state: PaginationState::Start,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Fetches the next batch, or `None` once the profile is finished
    ///
    /// The inter-request delay is awaited here, before every request but the
    /// first, so a batch is never interrupted halfway.
    pub async fn next_batch(&mut self) -> Option<CommentBatch> {
        if self.state.is_terminal() {
            return None;
        }
        if self.state == PaginationState::Fetching && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let offset = self.offset;
        let page = match self
            .source
            .fetch_comments(self.profile, offset, self.page_size)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Could not fetch comments of profile {}: {}", self.profile, e);
                self.transition(PaginationState::PrivateOrError {
                    reason: e.to_string(),
                });
                return None;
            }
        };

        if !page.success {
            let reason = page.error.unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(
                "Profile {} is private or refused the request: {}",
                self.profile,
                reason
            );
            self.transition(PaginationState::PrivateOrError { reason });
            return None;
        }

        // Only the first successful response defines the total
        if self.state == PaginationState::Start {
            self.total_count = page.total_count;
            match self.total_count {
                Some(total) => tracing::info!("Profile {} has {} comments", self.profile, total),
                None => tracing::info!("Profile {} did not report a comment total", self.profile),
            }
        }

        let html = page.comments_html.unwrap_or_default();
        if html.trim().is_empty() {
            tracing::info!("No more comments for profile {}", self.profile);
            self.transition(PaginationState::Exhausted);
            return None;
        }

        let comments = parse_comments(&html);
        let batch = CommentBatch {
            offset,
            total_count: self.total_count,
            comments,
        };

        let reached_total = self
            .total_count
            .is_some_and(|total| batch.progress() as u64 >= total);

        if batch.len() < self.page_size || reached_total {
            tracing::debug!(
                "Profile {} exhausted after {} comments",
                self.profile,
                batch.progress()
            );
            self.transition(PaginationState::Exhausted);
        } else {
            self.offset += self.page_size;
            self.transition(PaginationState::Fetching);
        }

        Some(batch)
    }

    fn transition(&mut self, next: PaginationState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "invalid pagination transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }
}
