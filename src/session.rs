//! Timeline Session
//!
//! Owns the fetched collection and every value derived from it. Each input
//! change runs the whole pipeline synchronously: filter, categories, then a
//! reveal reset, so the displayed window never lags behind the filtered set.

use crate::error::LoadError;
use crate::filter::{compute_categories, compute_filtered, SearchMode};
use crate::models::{FilterCriteria, TimelineItem};
use crate::reveal::{ExtendTicket, RevealWindow};

/// Why nothing is displayed once loading has finished without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The endpoint returned no items at all
    NoItems,
    /// Items exist but none match the active criteria
    NoMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSession {
    full_items: Vec<TimelineItem>,
    filtered: Vec<TimelineItem>,
    categories: Vec<String>,
    criteria: FilterCriteria,
    search_mode: SearchMode,
    window: RevealWindow,
    loading: bool,
    error: Option<LoadError>,
}

impl TimelineSession {
    /// A session waiting for its initial fetch
    pub fn new(criteria: FilterCriteria, search_mode: SearchMode, page_size: usize) -> Self {
        Self {
            full_items: Vec::new(),
            filtered: Vec::new(),
            categories: Vec::new(),
            criteria,
            search_mode,
            window: RevealWindow::new(page_size),
            loading: true,
            error: None,
        }
    }

    /// Apply the outcome of the fetch.
    pub fn finish_load(&mut self, result: Result<Vec<TimelineItem>, LoadError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.full_items = items;
                self.error = None;
            }
            Err(err) => {
                self.full_items = Vec::new();
                self.error = Some(err);
            }
        }
        self.categories = compute_categories(&self.full_items);
        self.refresh();
    }

    /// Replace the criteria. Returns false when nothing changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if self.criteria == criteria {
            return false;
        }
        self.criteria = criteria;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.filtered = compute_filtered(&self.full_items, &self.criteria, self.search_mode);
        self.window.reset(self.filtered.len());
    }

    pub fn can_load_more(&self) -> bool {
        self.window.can_extend(self.filtered.len())
    }

    /// Start an extension; `None` when busy or exhausted.
    pub fn begin_load_more(&mut self) -> Option<ExtendTicket> {
        self.window.begin_extend(self.filtered.len())
    }

    /// Apply a started extension. Returns false if it was superseded.
    pub fn finish_load_more(&mut self, ticket: ExtendTicket) -> bool {
        self.window.complete(ticket, self.filtered.len())
    }

    pub fn displayed_items(&self) -> &[TimelineItem] {
        &self.filtered[..self.window.displayed().min(self.filtered.len())]
    }

    pub fn full_items(&self) -> &[TimelineItem] {
        &self.full_items
    }

    pub fn filtered_items(&self) -> &[TimelineItem] {
        &self.filtered
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn loading_more(&self) -> bool {
        self.window.loading_more()
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.window.is_exhausted(self.filtered.len())
    }

    /// Whether the end-of-list sentinel should be on screen
    pub fn wants_sentinel(&self) -> bool {
        let displayed = self.window.displayed();
        !self.loading_more() && displayed > 0 && displayed < self.filtered.len()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading || self.error.is_some() || !self.filtered.is_empty() {
            return None;
        }
        if self.full_items.is_empty() || !self.criteria.is_active() {
            Some(EmptyState::NoItems)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
