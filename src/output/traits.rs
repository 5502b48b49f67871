//! Notification sink trait and the match report it carries

use async_trait::async_trait;

/// A comment by the watched owner that mentions a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Profile whose wall holds the comment
    pub profile_id: String,

    /// Visible comment text
    pub text: String,

    /// 1-based position among all comments of the profile
    pub index: u64,

    /// Page the comment is displayed on
    pub page: u64,

    /// Link to that page
    pub url: String,
}

impl MatchResult {
    /// Lines sent to a sink for this match, in order
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            "Matching comment found!".to_string(),
            format!("Profile: {}", self.profile_id),
            format!("Content: {}", self.text),
            format!("Comment number: {}", self.index),
            format!("Page: {}", self.page),
            format!("URL: {}", self.url),
        ]
    }
}

/// Outbound channel for match reports
///
/// Lines are buffered with `add_line` and sent together by `post`. Delivery
/// is fire-and-forget: implementations log their own failures and never
/// report them back to the scanner.
#[async_trait]
pub trait NotificationSink: Send {
    /// Buffers one line of the current message
    fn add_line(&mut self, line: String);

    /// Sends the buffered lines as one message and clears the buffer
    async fn post(&mut self);

    /// Buffers every line of `result` and posts them
    async fn deliver(&mut self, result: &MatchResult) {
        for line in result.report_lines() {
            self.add_line(line);
        }
        self.post().await;
    }
}
