//! Timeline Feed App
//!
//! Root component: sidebar on the left, status or timeline grid in the
//! main column, audio overlay on top.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{HttpTimelineSource, TimelineSource};
use crate::components::{AudioPlayer, ErrorPanel, Sidebar, TimelineList};
use crate::config::TimelineConfig;
use crate::context::FeedContext;
use crate::hooks::{use_timeline, TimelineOptions};
use crate::session::EmptyState;
use crate::store::{criteria_signal, UiState, UiStateStoreFields};

fn empty_message(state: EmptyState) -> &'static str {
    match state {
        EmptyState::NoItems => "No timeline items available.",
        EmptyState::NoMatches => "No items found matching your criteria.",
    }
}

#[component]
pub fn App(config: TimelineConfig) -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);
    provide_context(FeedContext::new(config.clone()));

    let source: Arc<dyn TimelineSource> = Arc::new(HttpTimelineSource::from_config(&config));
    let timeline = use_timeline(
        source,
        criteria_signal(store),
        TimelineOptions {
            page_size: config.effective_page_size(),
            load_more_delay_ms: config.load_more_delay_ms,
            search_mode: config.search_mode,
        },
    );

    view! {
        <div class="app-layout">
            <Sidebar categories=timeline.categories />

            <main class="main-content" class:sidebar-open=move || store.sidebar_open().get()>
                {move || {
                    if timeline.loading.get() {
                        view! { <span class="status loading">"Loading initial data..."</span> }.into_any()
                    } else if let Some(error) = timeline.error.get() {
                        view! { <ErrorPanel error=error /> }.into_any()
                    } else if let Some(empty) = timeline.empty_state.get() {
                        view! { <p class="status empty">{empty_message(empty)}</p> }.into_any()
                    } else {
                        view! { <TimelineList timeline=timeline /> }.into_any()
                    }
                }}
            </main>

            <AudioPlayer />
        </div>
    }
}
