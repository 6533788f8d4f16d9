/// Page state definitions for tracking crawl progress
///
/// This module defines all possible states a page can be in during a run.
use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Page was admitted and waits in the frontier
    Pending,

    /// Page is currently being fetched
    Fetching,

    // ===== Terminal States =====
    /// Page returned a 2xx response and its body was processed
    Fetched,

    /// Page could not be fetched (network error, timeout or non-2xx status)
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Fetched | Self::Failed)
    }

    /// Returns true if a page in this state may move to `next`
    ///
    /// Pages only move forward: Pending -> Fetching -> Fetched | Failed.
    pub fn can_transition_to(&self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }

        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Fetching, Self::Fetched)
                | (Self::Fetching, Self::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Fetched => "fetched",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
