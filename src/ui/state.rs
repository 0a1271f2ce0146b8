//! Explicit session state for the interactive screen.
//!
//! Every render is a pure function of this state; nothing about the current
//! search or selection lives anywhere else. A new search overwrites the
//! result set wholesale, while selection changes only touch the cursor, so
//! the selected course survives re-renders untouched.

use serde_json::Value;

use crate::constants::DEFAULT_SEARCH_QUERY;
use crate::data_fetcher::models::CourseSummary;
use crate::data_fetcher::projector::project_summaries;

/// Which part of the search screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keystrokes edit the query input line
    #[default]
    Input,
    /// Arrow keys move the result selection
    Results,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum StatusLine {
    #[default]
    None,
    /// Empty-success and similar neutral notices
    Info(String),
    /// A failed request; the session stays usable
    Error(String),
}

#[derive(Debug)]
pub struct SearchSession {
    /// The query text currently in the input line
    pub query: String,
    /// The query string the current results were fetched with
    pub last_query: Option<String>,
    /// Raw payload of the last search, kept for embedded detail lookups
    pub payload: Option<Value>,
    /// Projected summaries of the last search, in received order
    pub summaries: Vec<CourseSummary>,
    /// Cursor into `summaries`
    pub selected: usize,
    pub status: StatusLine,
}

impl SearchSession {
    pub fn new(initial_query: Option<String>) -> Self {
        SearchSession {
            query: initial_query.unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string()),
            last_query: None,
            payload: None,
            summaries: Vec::new(),
            selected: 0,
            status: StatusLine::None,
        }
    }

    /// Replaces the whole result set with a new search's payload. The
    /// previous payload, summaries, and selection are discarded.
    pub fn set_results(&mut self, query: String, payload: Value) {
        self.summaries = project_summaries(&payload);
        self.payload = Some(payload);
        self.last_query = Some(query);
        self.selected = 0;
        self.status = if self.summaries.is_empty() {
            StatusLine::Info("No courses found.".to_string())
        } else {
            StatusLine::None
        };
    }

    /// Records a failed search. Existing results are discarded so the screen
    /// cannot show rows that do not belong to the attempted query.
    pub fn set_search_failure(&mut self, message: String) {
        self.summaries.clear();
        self.payload = None;
        self.last_query = None;
        self.selected = 0;
        self.status = StatusLine::Error(message);
    }

    pub fn selected_summary(&self) -> Option<&CourseSummary> {
        self.summaries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.summaries.is_empty() && self.selected + 1 < self.summaries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn has_results(&self) -> bool {
        !self.summaries.is_empty()
    }
}
