//! Timeline List Component
//!
//! Renders the displayed window as a grid, followed by the loading
//! indicator, the load sentinel or the end-of-list marker.

use leptos::prelude::*;

use crate::components::{LoadSentinel, TimelineCard};
use crate::hooks::TimelineHandle;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn TimelineList(timeline: TimelineHandle) -> impl IntoView {
    let store = use_ui_store();

    // Fewer columns while the sidebar takes up room
    let grid_class = move || {
        if store.sidebar_open().get() {
            "timeline-grid timeline-grid-narrow"
        } else {
            "timeline-grid timeline-grid-wide"
        }
    };

    let reached_end = move || {
        let shown = timeline.displayed_items.with(Vec::len);
        !timeline.loading_more.get() && shown > 0 && shown == timeline.filtered_items_count.get()
    };

    view! {
        <div class="timeline">
            <div class=grid_class>
                <For
                    each=move || timeline.displayed_items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <TimelineCard item=item /> }
                />
            </div>

            <Show when=move || timeline.loading_more.get()>
                <div class="loading-more">"Loading more items..."</div>
            </Show>

            <Show when=move || timeline.wants_sentinel.get()>
                <LoadSentinel on_visible=timeline.load_more />
            </Show>

            <Show when=reached_end>
                <div class="end-of-list">"You've reached the end of the timeline."</div>
            </Show>
        </div>
    }
}
