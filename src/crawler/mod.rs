//! Comment scanning
//!
//! This module contains the core scanning logic, including:
//! - HTTP fetching of comment windows and friend lists
//! - Parsing comment blocks and friend list pages
//! - Offset/count pagination per profile
//! - Author and keyword matching, page location
//! - Overall scan coordination

mod coordinator;
mod fetcher;
mod locator;
mod matcher;
mod paginator;
mod parser;

#[cfg(test)]
mod test_support;

pub use coordinator::{find_matches, preloaded_scan_list, run_scan, Coordinator};
pub use fetcher::{
    build_http_client, fetch_text, CommentPage, CommentSource, FetchError, HttpCommentSource,
};
pub use locator::{page_of, DEFAULT_COMMENTS_PER_PAGE};
pub use matcher::{author_matches, keyword_matches};
pub use paginator::{CommentBatch, CommentPaginator};
pub use parser::{extract_profile_ids, parse_comments, CommentRecord};
