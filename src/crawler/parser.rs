//! HTML parser for comment fragments and friend list pages
//!
//! This module extracts:
//! - Comment blocks (author link, visible text, emoticon labels) from the
//!   markup fragment returned by the comment-listing API
//! - Profile ids from the owner's friend list page

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static COMMENT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.commentthread_comment_content").expect("valid selector"));
static AUTHOR_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.hoverunderline.commentthread_author_link[href]").expect("valid selector")
});
static COMMENT_TEXT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.commentthread_comment_text").expect("valid selector"));
static EMOTICON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.emoticon[alt]").expect("valid selector"));
static FRIEND_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.selectable.friend_block_v2[data-steamid]").expect("valid selector")
});

/// One comment as found in a listing fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRecord {
    /// `href` of the author link, empty when the block has none
    pub author_ref: String,

    /// Visible text with every text node trimmed and concatenated
    pub text: String,

    /// Non-empty `alt` labels of the emoticons embedded in the text
    pub emoticons: Vec<String>,
}

/// Parses a comment-listing fragment into records, in document order
///
/// Every comment block yields a record, even one without a text element,
/// so that positions within the batch stay aligned with the listing.
///
/// # Example
///
/// ```
/// use comment_scout::crawler::parse_comments;
///
/// let html = r#"<div class="commentthread_comment_content">
///     <a class="hoverunderline commentthread_author_link" href="https://example.com/id/abc">abc</a>
///     <div class="commentthread_comment_text">hi <img class="emoticon" alt=":Aegg:"></div>
/// </div>"#;
/// let comments = parse_comments(html);
/// assert_eq!(comments[0].text, "hi");
/// assert_eq!(comments[0].emoticons, vec![":Aegg:".to_string()]);
/// ```
pub fn parse_comments(html: &str) -> Vec<CommentRecord> {
    let cleaned = html.replace(['\n', '\t'], "");
    let fragment = Html::parse_fragment(&cleaned);

    fragment
        .select(&COMMENT_BLOCK)
        .map(|block| {
            let author_ref = block
                .select(&AUTHOR_LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .to_string();

            let (text, emoticons) = match block.select(&COMMENT_TEXT).next() {
                Some(body) => (visible_text(body), emoticon_labels(body)),
                None => {
                    tracing::debug!("Comment block without text element");
                    (String::new(), Vec::new())
                }
            };

            CommentRecord {
                author_ref,
                text,
                emoticons,
            }
        })
        .collect()
}

/// Extracts profile ids from a friend list page, in document order
///
/// Duplicates are kept; `ScanList` takes care of them.
pub fn extract_profile_ids(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&FRIEND_BLOCK)
        .filter_map(|block| block.value().attr("data-steamid"))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn emoticon_labels(element: ElementRef<'_>) -> Vec<String> {
    element
        .select(&EMOTICON)
        .filter_map(|img| img.value().attr("alt"))
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect()
}
