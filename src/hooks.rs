//! Timeline Hook
//!
//! Binds a `TimelineSession` to Leptos signals: one fetch on mount, a
//! filter cycle on every criteria change, and a delayed `load_more`.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{load_timeline, TimelineSource};
use crate::error::LoadError;
use crate::filter::SearchMode;
use crate::models::{FilterCriteria, TimelineItem};
use crate::session::{EmptyState, TimelineSession};

/// Paging and matching knobs for one hook instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineOptions {
    pub page_size: usize,
    pub load_more_delay_ms: u32,
    pub search_mode: SearchMode,
}

/// Read side of the hook plus the `load_more` entry point
#[derive(Clone, Copy)]
pub struct TimelineHandle {
    pub displayed_items: Memo<Vec<TimelineItem>>,
    pub loading: Memo<bool>,
    pub loading_more: Memo<bool>,
    pub error: Memo<Option<LoadError>>,
    pub filtered_items_count: Memo<usize>,
    pub categories: Memo<Vec<String>>,
    pub empty_state: Memo<Option<EmptyState>>,
    /// Whether the end-of-list sentinel should be rendered
    pub wants_sentinel: Memo<bool>,
    pub load_more: Callback<()>,
}

pub fn use_timeline(
    source: Arc<dyn TimelineSource>,
    criteria: Signal<FilterCriteria>,
    options: TimelineOptions,
) -> TimelineHandle {
    let session = RwSignal::new(TimelineSession::new(
        criteria.get_untracked(),
        options.search_mode,
        options.page_size,
    ));

    // Fetch once on mount
    Effect::new(move |_| {
        let source = source.clone();
        spawn_local(async move {
            let result = load_timeline(source.as_ref()).await;
            if let Err(e) = &result {
                log::error!("[Timeline] load failed: {}", e);
            }
            session.try_update(|s| s.finish_load(result));
        });
    });

    // New criteria: filter and reset in one update
    Effect::new(move |_| {
        let next = criteria.get();
        session.update(|s| {
            if s.set_criteria(next) {
                log::debug!("[Timeline] {} items match", s.filtered_count());
            }
        });
    });

    let delay_ms = options.load_more_delay_ms;
    let load_more = Callback::new(move |_: ()| {
        if !session.with_untracked(TimelineSession::can_load_more) {
            return;
        }
        let Some(ticket) = session.try_update(|s| s.begin_load_more()).flatten() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let applied = session.try_update(|s| s.finish_load_more(ticket));
            if applied == Some(false) {
                log::debug!("[Timeline] dropped stale page");
            }
        });
    });

    TimelineHandle {
        displayed_items: Memo::new(move |_| session.with(|s| s.displayed_items().to_vec())),
        loading: Memo::new(move |_| session.with(TimelineSession::loading)),
        loading_more: Memo::new(move |_| session.with(TimelineSession::loading_more)),
        error: Memo::new(move |_| session.with(|s| s.error().cloned())),
        filtered_items_count: Memo::new(move |_| session.with(TimelineSession::filtered_count)),
        categories: Memo::new(move |_| session.with(|s| s.categories().to_vec())),
        empty_state: Memo::new(move |_| session.with(TimelineSession::empty_state)),
        wants_sentinel: Memo::new(move |_| session.with(TimelineSession::wants_sentinel)),
        load_more,
    }
}
