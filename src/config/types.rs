use crate::config::PROFILE_ID_PLACEHOLDER;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Comment-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub target: TargetConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}

impl Config {
    /// Returns the URL of the owner's friend list page
    ///
    /// Falls back to the community friend list of `owner-reference` when no
    /// explicit `friends-url` is configured.
    pub fn friends_url(&self) -> String {
        match &self.target.friends_url {
            Some(url) => url.clone(),
            None => format!(
                "https://steamcommunity.com/{}/friends",
                self.target.owner_reference.trim_matches('/')
            ),
        }
    }
}

/// Who to watch and what to look for
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Fragment of the owner's profile link (e.g. "id/abc123" or "profiles/7656...")
    #[serde(rename = "owner-reference")]
    pub owner_reference: String,

    /// Keywords searched in comment text and emoticon labels
    pub keywords: Vec<String>,

    /// How the author link is compared with `owner_reference`
    #[serde(rename = "author-match", default)]
    pub author_match: AuthorMatch,

    /// Friend list page; derived from `owner_reference` when absent
    #[serde(rename = "friends-url", default)]
    pub friends_url: Option<String>,

    /// Profiles to scan instead of resolving the friend list
    #[serde(default)]
    pub profiles: Vec<String>,

    /// Suffix-digit filter expression ("d" or "d1-d2")
    #[serde(default)]
    pub filter: Option<String>,
}

/// Author comparison mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorMatch {
    /// Author link contains the owner reference anywhere
    #[default]
    Substring,
    /// Author link ends with the owner reference as a whole path segment
    Exact,
}

/// Comment-listing API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Comment-listing endpoint, `{profile_id}` is substituted
    #[serde(rename = "comment-api-url")]
    pub comment_api_url: String,

    /// Human-facing comment page, `{profile_id}` is substituted
    #[serde(rename = "comment-base-url")]
    pub comment_base_url: String,

    /// Comments requested per API call
    #[serde(rename = "page-size")]
    pub page_size: usize,

    /// Comments shown per page on the human-facing site
    #[serde(rename = "comments-per-page")]
    pub comments_per_page: u64,

    /// Wait between two batch requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            comment_api_url: "https://steamcommunity.com/comment/Profile/render/{profile_id}/-1/"
                .to_string(),
            comment_base_url: "https://steamcommunity.com/profiles/{profile_id}/allcomments"
                .to_string(),
            page_size: 500,
            comments_per_page: 50,
            request_delay_ms: 1000,
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Comment-listing endpoint for one profile
    pub fn comment_api_url_for(&self, profile_id: &str) -> String {
        self.comment_api_url
            .replace(PROFILE_ID_PLACEHOLDER, profile_id)
    }

    /// Human-facing comment page for one profile
    pub fn comment_base_url_for(&self, profile_id: &str) -> String {
        self.comment_base_url
            .replace(PROFILE_ID_PLACEHOLDER, profile_id)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Webhook notification target
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    pub url: String,

    /// Display name attached to posted messages
    #[serde(default)]
    pub username: Option<String>,
}
