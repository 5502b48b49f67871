//! Author and keyword predicates applied to every parsed comment

use crate::config::AuthorMatch;
use crate::crawler::parser::CommentRecord;

/// Checks whether a comment was written by the watched owner
///
/// # Modes
///
/// - `Substring`: the author link contains `owner_reference` anywhere. Loose
///   on purpose, so a vanity fragment like `id/abc123` matches the full link.
///   A short reference can match unrelated profiles.
/// - `Exact`: the author link, without trailing `/`, equals
///   `owner_reference` or ends with `/{owner_reference}`.
///
/// # Examples
///
/// ```
/// use comment_scout::config::AuthorMatch;
/// use comment_scout::crawler::{author_matches, CommentRecord};
///
/// let record = CommentRecord {
///     author_ref: "https://steamcommunity.com/id/abc123".to_string(),
///     ..Default::default()
/// };
/// assert!(author_matches(&record, "id/abc", AuthorMatch::Substring));
/// assert!(!author_matches(&record, "id/abc", AuthorMatch::Exact));
/// assert!(author_matches(&record, "id/abc123", AuthorMatch::Exact));
/// ```
pub fn author_matches(record: &CommentRecord, owner_reference: &str, mode: AuthorMatch) -> bool {
    match mode {
        AuthorMatch::Substring => record.author_ref.contains(owner_reference),
        AuthorMatch::Exact => {
            let author = record.author_ref.trim_end_matches('/');
            let owner = owner_reference.trim_matches('/');
            if owner.is_empty() {
                return false;
            }
            author == owner
                || author
                    .strip_suffix(owner)
                    .is_some_and(|prefix| prefix.ends_with('/'))
        }
    }
}

/// Checks whether a comment mentions any keyword
///
/// The searched string is the visible text, one space, then the emoticon
/// labels joined by spaces. Matching is case-sensitive and stops at the
/// first keyword found.
pub fn keyword_matches<S: AsRef<str>>(record: &CommentRecord, keywords: &[S]) -> bool {
    let searchable = format!("{} {}", record.text, record.emoticons.join(" "));
    keywords
        .iter()
        .any(|keyword| searchable.contains(keyword.as_ref()))
}
