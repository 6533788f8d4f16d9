//! Scheduler for managing the crawl frontier and the visit record
//!
//! This module handles:
//! - The FIFO frontier of URLs waiting to be fetched
//! - The visit record guaranteeing each normalized URL is fetched at most once
//! - Depth limiting and scope checks at admission time

use crate::scope::Scope;
use crate::state::PageState;
use std::collections::{HashMap, VecDeque};
use url::Url;

/// A URL queued for fetching together with its link distance from a seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// The normalized URL to fetch
    pub url: Url,

    /// Seeds are at depth 1, pages they link to at depth 2, and so on
    pub depth: u32,
}

/// Outcome of offering a URL to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The URL was recorded and queued
    Admitted,
    /// The URL is already in the visit record
    AlreadySeen,
    /// The URL is deeper than the configured maximum depth
    DepthExceeded,
    /// The URL does not satisfy the run's scope
    OutOfScope,
}

/// Scheduler manages the frontier and the visit record
///
/// The visit record maps every admitted URL to its [`PageState`]. Admission
/// inserts into the record before queueing, so two pages linking to the same
/// URL can never both schedule it.
pub struct Scheduler {
    /// URLs waiting to be fetched, oldest first
    frontier: VecDeque<QueuedUrl>,

    /// Every admitted URL and its current state
    pages: HashMap<String, PageState>,

    scope: Scope,

    /// 0 means unlimited
    max_depth: u32,
}

impl Scheduler {
    /// Creates a new scheduler
    ///
    /// # Arguments
    ///
    /// * `scope` - The constraint every admitted URL must satisfy
    /// * `max_depth` - Maximum link depth (0 for unlimited)
    pub fn new(scope: Scope, max_depth: u32) -> Self {
        Self {
            frontier: VecDeque::new(),
            pages: HashMap::new(),
            scope,
            max_depth,
        }
    }

    /// Offers a URL at the given depth
    ///
    /// Checks run in order: visit record, depth, scope. Only an
    /// [`Admission::Admitted`] URL is recorded as [`PageState::Pending`] and
    /// queued.
    pub fn admit(&mut self, url: Url, depth: u32) -> Admission {
        if self.pages.contains_key(url.as_str()) {
            return Admission::AlreadySeen;
        }

        if self.max_depth != 0 && depth > self.max_depth {
            tracing::trace!("Depth {} exceeds limit for {}", depth, url);
            return Admission::DepthExceeded;
        }

        if !self.scope.allows(&url) {
            tracing::trace!("Out of scope: {}", url);
            return Admission::OutOfScope;
        }

        self.pages.insert(url.to_string(), PageState::Pending);
        self.frontier.push_back(QueuedUrl { url, depth });
        Admission::Admitted
    }

    /// Takes the next URL off the frontier and marks it as fetching
    pub fn next_url(&mut self) -> Option<QueuedUrl> {
        let queued = self.frontier.pop_front()?;
        self.pages
            .insert(queued.url.to_string(), PageState::Fetching);
        tracing::trace!("Scheduling {} at depth {}", queued.url, queued.depth);
        Some(queued)
    }

    /// Moves a recorded URL to a new state
    ///
    /// Returns false (and leaves the record untouched) if the URL is unknown
    /// or the transition is not allowed.
    pub fn mark(&mut self, url: &Url, state: PageState) -> bool {
        match self.pages.get_mut(url.as_str()) {
            Some(current) if current.can_transition_to(state) => {
                *current = state;
                true
            }
            Some(current) => {
                tracing::warn!(
                    "Ignoring transition {} -> {} for {}",
                    current,
                    state,
                    url
                );
                false
            }
            None => false,
        }
    }

    /// Returns the recorded state of a URL, if it was ever admitted
    pub fn state_of(&self, url: &Url) -> Option<PageState> {
        self.pages.get(url.as_str()).copied()
    }

    /// Returns the number of URLs in the frontier
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Returns whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of URLs in the visit record
    pub fn visited_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of recorded URLs currently in `state`
    pub fn count_in_state(&self, state: PageState) -> usize {
        self.pages.values().filter(|s| **s == state).count()
    }
}
