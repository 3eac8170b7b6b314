//! Locate-and-highlight lifecycle over the external document viewer
//!
//! The locator turns a clause reference into search candidates, drives the
//! viewer's literal-search primitive, and manages the highlight lifecycle:
//! `Idle -> Pending (no document yet) -> Searching -> Highlighted -> Idle`.
//! All public operations absorb failures; none of them panics or returns an
//! error to the caller.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::error::LocateError;
use crate::variants::{build_variants, first_line_excerpt};

/// Seconds a highlight stays on screen before it is auto-cleared.
pub const AUTO_CLEAR_SECS: i64 = 8;

/// Literal-search primitive exposed by the external document viewer.
///
/// `find` reports a match count and returns 0, never an error, when nothing
/// matches; it may be queried before any successful match. `navigate`
/// scrolls the view to a zero-indexed occurrence of the last find.
pub trait DocumentSearch {
    fn find(&mut self, text: &str) -> usize;
    fn navigate(&mut self, match_index: usize);
    fn clear_highlight(&mut self);
}

/// Observable lifecycle state (`Searching` is transient within a call and
/// never observed between calls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorState {
    Idle,
    Pending,
    Highlighted,
}

#[derive(Debug, Clone)]
struct HighlightSession {
    query: String,
    clear_deadline: DateTime<Utc>,
}

/// Clause locator over a viewer `S`.
///
/// Single-threaded by design: the host calls every operation from its UI
/// context and pumps [`ClauseLocator::tick`] from its frame loop. Time is
/// always passed in explicitly, never read ambiently.
#[derive(Debug)]
pub struct ClauseLocator<S> {
    viewer: Option<S>,
    document_loaded: bool,
    // Single-slot pending buffer: a locate call issued before the document
    // is ready overwrites any earlier unexecuted request (last wins, no
    // queueing).
    pending: Option<String>,
    highlight: Option<HighlightSession>,
}

impl<S> Default for ClauseLocator<S> {
    fn default() -> Self {
        Self {
            viewer: None,
            document_loaded: false,
            pending: None,
            highlight: None,
        }
    }
}

impl<S: DocumentSearch> ClauseLocator<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewer(viewer: S) -> Self {
        Self {
            viewer: Some(viewer),
            ..Self::default()
        }
    }

    pub fn attach_viewer(&mut self, viewer: S) {
        self.viewer = Some(viewer);
    }

    pub fn viewer(&self) -> Option<&S> {
        self.viewer.as_ref()
    }

    pub fn state(&self) -> LocatorState {
        if self.highlight.is_some() {
            LocatorState::Highlighted
        } else if self.pending.is_some() {
            LocatorState::Pending
        } else {
            LocatorState::Idle
        }
    }

    /// The variant currently highlighted, if any.
    pub fn highlighted_query(&self) -> Option<&str> {
        self.highlight.as_ref().map(|session| session.query.as_str())
    }

    /// Locate a clause reference and scroll the viewer to it.
    pub fn search_and_scroll_to(&mut self, text: &str, now: DateTime<Utc>) {
        self.request(text.to_string(), now);
    }

    /// Same path as [`ClauseLocator::search_and_scroll_to`]; kept as the
    /// entry point clause lists and chat replies call.
    pub fn highlight_clause(&mut self, reference: &str, now: DateTime<Utc>) {
        self.request(reference.to_string(), now);
    }

    /// Locate the excerpt that triggered a risk finding. Only the first
    /// line, capped at 100 characters, is searched.
    pub fn highlight_risk_excerpt(&mut self, excerpt: &str, now: DateTime<Utc>) {
        self.request(first_line_excerpt(excerpt), now);
    }

    /// Cancel any pending request and clear the current highlight. Safe to
    /// call when nothing is highlighted; idle calls touch nothing.
    pub fn clear_highlights(&mut self) {
        let had_pending = self.pending.take().is_some();
        let had_highlight = self.highlight.take().is_some();
        if !had_pending && !had_highlight {
            return;
        }
        if had_highlight {
            if let Some(viewer) = self.viewer.as_mut() {
                viewer.clear_highlight();
            }
        }
    }

    /// Document-load signal, fired at most once per document open. Replays
    /// the stored pending request, if any.
    pub fn document_loaded(&mut self, now: DateTime<Utc>) {
        self.document_loaded = true;
        if let Some(query) = self.pending.take() {
            self.run(&query, now);
        }
    }

    /// Auto-clear pump; the host calls this from its frame loop. Clears the
    /// highlight once its deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let expired = self
            .highlight
            .as_ref()
            .is_some_and(|session| now >= session.clear_deadline);
        if expired {
            if let Some(session) = self.highlight.take() {
                debug!(query = %session.query, "highlight auto-clear deadline reached");
            }
            if let Some(viewer) = self.viewer.as_mut() {
                viewer.clear_highlight();
            }
        }
    }

    fn request(&mut self, query: String, now: DateTime<Utc>) {
        // A new locate supersedes whatever is on screen or queued. Disarm
        // the old deadline before anything else so a stale timer can never
        // clear the newer highlight.
        if self.highlight.take().is_some() {
            if let Some(viewer) = self.viewer.as_mut() {
                viewer.clear_highlight();
            }
        }
        if !self.document_loaded {
            debug!(query = %query, "document not loaded, storing pending locate request");
            self.pending = Some(query);
            return;
        }
        self.run(&query, now);
    }

    fn run(&mut self, query: &str, now: DateTime<Utc>) {
        match self.execute(query, now) {
            Ok(()) => {}
            Err(LocateError::NoMatch { query }) => {
                debug!(query = %query, "no variant matched, leaving view untouched");
            }
            Err(err @ LocateError::ViewerUnavailable) => {
                warn!(query = %query, "{err}");
            }
        }
    }

    fn execute(&mut self, query: &str, now: DateTime<Utc>) -> Result<(), LocateError> {
        let viewer = self.viewer.as_mut().ok_or(LocateError::ViewerUnavailable)?;
        for variant in build_variants(query) {
            let count = viewer.find(&variant);
            if count == 0 {
                continue;
            }
            // The first occurrence of a short clause number is frequently
            // the table-of-contents entry, so prefer the second match when
            // one exists.
            let index = if count > 1 { 1 } else { 0 };
            viewer.navigate(index);
            self.highlight = Some(HighlightSession {
                query: variant,
                clear_deadline: now + Duration::seconds(AUTO_CLEAR_SECS),
            });
            return Ok(());
        }
        Err(LocateError::NoMatch {
            query: query.to_string(),
        })
    }
}
