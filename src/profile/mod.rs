//! Profile identifiers and the per-run scan list
//!
//! # Components
//!
//! - `ProfileId`: opaque numeric identifier of a scanned profile
//! - `FilterSpec`: allowed last digits of a profile id
//! - `ScanList`: the ordered, duplicate-free set of profiles a run scans
//! - `FriendResolver`: builds a `ScanList` from the owner's friend list page

mod filter;
mod resolver;

pub use filter::{parse_filter_argument, FilterParseError, FilterSpec};
pub use resolver::{FriendResolver, ResolveError};

use std::collections::HashSet;
use std::fmt;

/// Opaque identifier of a profile whose comment wall is scanned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the last character, if it is a decimal digit
    pub fn last_digit(&self) -> Option<u8> {
        self.0
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ordered list of profiles to scan in one run
///
/// Built once and never mutated afterwards. Duplicates are dropped on
/// construction, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanList(Vec<ProfileId>);

impl ScanList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfileId> {
        self.0.iter()
    }

    /// Returns a new list holding only the profiles accepted by `filter`
    pub fn filtered(&self, filter: &FilterSpec) -> ScanList {
        self.0
            .iter()
            .filter(|id| filter.accepts(id))
            .cloned()
            .collect()
    }
}

impl FromIterator<ProfileId> for ScanList {
    fn from_iter<I: IntoIterator<Item = ProfileId>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let ids = iter
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a ScanList {
    type Item = &'a ProfileId;
    type IntoIter = std::slice::Iter<'a, ProfileId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
