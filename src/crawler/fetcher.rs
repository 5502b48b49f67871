//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scanner:
//! - Building the HTTP client with a proper user agent and timeout
//! - POSTing offset/count windows to the comment-listing API
//! - GETting plain pages (the friend list)
//! - Error classification (timeout, status, network, undecodable body)
//!
//! No request is ever retried.

use crate::config::{ApiConfig, UserAgentConfig};
use crate::profile::ProfileId;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Undecodable response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// Classifies a reqwest error for `url`
    fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        let url = url.to_string();
        if e.is_timeout() {
            FetchError::Timeout { url }
        } else if let Some(status) = e.status() {
            FetchError::Status {
                url,
                status: status.as_u16(),
            }
        } else if e.is_connect() {
            FetchError::Network {
                url,
                message: "Connection refused".to_string(),
            }
        } else {
            FetchError::Network {
                url,
                message: e.to_string(),
            }
        }
    }
}

/// Decoded comment-listing API response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
    /// False for private profiles and other refusals
    #[serde(default)]
    pub success: bool,

    /// Server explanation when `success` is false
    #[serde(default)]
    pub error: Option<String>,

    /// Total number of comments on the wall
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Markup fragment holding the comment blocks of this window
    #[serde(default)]
    pub comments_html: Option<String>,
}

/// Source of comment listing windows
///
/// The scanner depends only on this seam, never on the transport.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetches `count` comments of `profile` starting at `offset`
    async fn fetch_comments(
        &self,
        profile: &ProfileId,
        offset: usize,
        count: usize,
    ) -> Result<CommentPage, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use comment_scout::config::UserAgentConfig;
/// use comment_scout::crawler::build_http_client;
/// use std::time::Duration;
///
/// let config = UserAgentConfig {
///     crawler_name: "CommentScout".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config, Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig, timeout: Duration) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with GET, failing on non-2xx statuses
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))
}

/// Comment-listing API over HTTP
#[derive(Debug, Clone)]
pub struct HttpCommentSource {
    client: Client,
    api: ApiConfig,
}

impl HttpCommentSource {
    pub fn new(client: Client, api: ApiConfig) -> Self {
        Self { client, api }
    }
}

#[async_trait]
impl CommentSource for HttpCommentSource {
    async fn fetch_comments(
        &self,
        profile: &ProfileId,
        offset: usize,
        count: usize,
    ) -> Result<CommentPage, FetchError> {
        let url = self.api.comment_api_url_for(profile.as_str());
        tracing::debug!("POST {} start={} count={}", url, offset, count);

        let response = self
            .client
            .post(&url)
            .form(&[("start", offset), ("count", count)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
