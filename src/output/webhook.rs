//! Webhook notification sink
//!
//! Posts each match as one JSON message (`{"content": ..., "username": ...}`),
//! the format accepted by Discord-style chat webhooks.

use crate::config::WebhookConfig;
use crate::output::traits::NotificationSink;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Longest `content` a Discord-style webhook accepts, in characters
pub const MAX_CONTENT_CHARS: usize = 2000;

const ELLIPSIS: &str = "...";

#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

/// Sink that posts buffered lines to a webhook URL
pub struct WebhookSink {
    client: Client,
    config: WebhookConfig,
    lines: Vec<String>,
    delivered: usize,
    failed: usize,
}

impl WebhookSink {
    pub fn new(client: Client, config: WebhookConfig) -> Self {
        Self {
            client,
            config,
            lines: Vec::new(),
            delivered: 0,
            failed: 0,
        }
    }

    /// Messages accepted by the webhook so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Messages that could not be delivered so far
    pub fn failed(&self) -> usize {
        self.failed
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn add_line(&mut self, line: String) {
        self.lines.push(line);
    }

    async fn post(&mut self) {
        if self.lines.is_empty() {
            return;
        }

        let message = WebhookMessage {
            content: fit_content(std::mem::take(&mut self.lines)),
            username: self.config.username.as_deref(),
        };

        let result = self
            .client
            .post(&self.config.url)
            .json(&message)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => {
                self.delivered += 1;
                tracing::debug!("Webhook message delivered");
            }
            Err(e) => {
                self.failed += 1;
                tracing::warn!("Webhook delivery failed: {}", e);
            }
        }
    }
}

/// Joins `lines`, shortening the longest one until the message fits
///
/// Header, counters and URL lines are short, so the comment content is the
/// line that gets cut.
fn fit_content(mut lines: Vec<String>) -> String {
    let separators = lines.len().saturating_sub(1);
    let total = lines.iter().map(|l| l.chars().count()).sum::<usize>() + separators;
    if total <= MAX_CONTENT_CHARS {
        return lines.join("\n");
    }

    let excess = total - MAX_CONTENT_CHARS + ELLIPSIS.len();
    if let Some(longest) = lines.iter_mut().max_by_key(|l| l.chars().count()) {
        let keep = longest.chars().count().saturating_sub(excess);
        let mut cut: String = longest.chars().take(keep).collect();
        cut.push_str(ELLIPSIS);
        *longest = cut;
    }

    // Many long lines can still overflow
    lines.join("\n").chars().take(MAX_CONTENT_CHARS).collect()
}
