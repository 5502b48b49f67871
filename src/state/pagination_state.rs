//! Pagination state definitions for one profile's comment scan
use std::fmt;

/// Where a profile's comment pagination currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    // ===== Active States =====
    /// No request issued yet
    Start,

    /// At least one batch fetched, more may follow
    Fetching,

    // ===== Terminal States =====
    /// Every comment has been listed
    Exhausted,

    /// Private profile, API refusal, or transport failure
    PrivateOrError {
        /// Server-provided or transport error description
        reason: String,
    },
}

impl PaginationState {
    /// Returns true if no further batch can be produced
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::PrivateOrError { .. })
    }

    /// Returns true if the profile was listed to the end
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns true if the scan ended early
    pub fn is_error(&self) -> bool {
        matches!(self, Self::PrivateOrError { .. })
    }

    /// Whether `self -> next` is a legal step
    ///
    /// ```text
    /// Start    -> Fetching | Exhausted | PrivateOrError
    /// Fetching -> Fetching | Exhausted | PrivateOrError
    /// ```
    pub fn can_transition_to(&self, next: &PaginationState) -> bool {
        match self {
            Self::Start | Self::Fetching => !matches!(next, Self::Start),
            Self::Exhausted | Self::PrivateOrError { .. } => false,
        }
    }
}

impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Fetching => write!(f, "fetching"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::PrivateOrError { reason } => write!(f, "private or error ({})", reason),
        }
    }
}
