//! In-memory comment walls for unit tests

use crate::crawler::fetcher::{CommentPage, CommentSource, FetchError};
use crate::profile::ProfileId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) const OWNER_LINK: &str = "https://steamcommunity.com/id/owner";
pub(crate) const STRANGER_LINK: &str = "https://steamcommunity.com/id/stranger";

/// Renders one comment block the way the listing API does
pub(crate) fn comment_block(author: &str, text: &str) -> String {
    format!(
        r#"<div class="commentthread_comment">
            <div class="commentthread_comment_content">
                <a class="hoverunderline commentthread_author_link" href="{author}"><bdi>x</bdi></a>
                <div class="commentthread_comment_text">{text}</div>
            </div>
        </div>"#
    )
}

#[derive(Default)]
pub(crate) struct FakeWall {
    pub comments: usize,
    pub reported_total: Option<u64>,
    pub private: bool,
    /// 0-based absolute position -> (author link, text)
    pub special: HashMap<usize, (String, String)>,
}

impl FakeWall {
    pub fn with_comments(comments: usize) -> Self {
        Self {
            comments,
            reported_total: Some(comments as u64),
            ..Default::default()
        }
    }

    pub fn private() -> Self {
        Self {
            private: true,
            ..Default::default()
        }
    }

    pub fn with_special(mut self, position: usize, author: &str, text: &str) -> Self {
        self.special
            .insert(position, (author.to_string(), text.to_string()));
        self
    }
}

/// Serves `FakeWall`s; unknown profiles fail at the transport level
#[derive(Default)]
pub(crate) struct FakeSource {
    walls: HashMap<String, FakeWall>,
    requests: Mutex<Vec<(String, usize, usize)>>,
}

impl FakeSource {
    pub fn with_wall(mut self, profile: &str, wall: FakeWall) -> Self {
        self.walls.insert(profile.to_string(), wall);
        self
    }

    pub fn requests(&self) -> Vec<(String, usize, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSource for FakeSource {
    async fn fetch_comments(
        &self,
        profile: &ProfileId,
        offset: usize,
        count: usize,
    ) -> Result<CommentPage, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((profile.to_string(), offset, count));

        let Some(wall) = self.walls.get(profile.as_str()) else {
            return Err(FetchError::Network {
                url: format!("fake://{}", profile),
                message: "Connection refused".to_string(),
            });
        };

        if wall.private {
            return Ok(CommentPage {
                success: false,
                error: Some("This profile is private.".to_string()),
                ..Default::default()
            });
        }

        let end = wall.comments.min(offset + count);
        let html: String = (offset..end)
            .map(|position| match wall.special.get(&position) {
                Some((author, text)) => comment_block(author, text),
                None => comment_block(STRANGER_LINK, "filler"),
            })
            .collect();

        Ok(CommentPage {
            success: true,
            error: None,
            total_count: wall.reported_total,
            comments_html: Some(html),
        })
    }
}
