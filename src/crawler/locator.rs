/// Comments shown per page on the human-facing comment listing
pub const DEFAULT_COMMENTS_PER_PAGE: u64 = 50;

/// Maps a 1-based absolute comment index to the page it is displayed on
///
/// # Examples
///
/// ```
/// use comment_scout::page_of;
///
/// assert_eq!(page_of(1, 50), 1);
/// assert_eq!(page_of(50, 50), 1);
/// assert_eq!(page_of(51, 50), 2);
/// assert_eq!(page_of(505, 50), 11);
/// ```
pub fn page_of(index: u64, comments_per_page: u64) -> u64 {
    debug_assert!(comments_per_page > 0, "comments_per_page must be positive");
    index.div_ceil(comments_per_page)
}
