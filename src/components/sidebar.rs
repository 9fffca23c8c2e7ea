//! Sidebar Component
//!
//! Collapsible left column with the search box and the category list.

use leptos::prelude::*;

use crate::store::{
    store_clear_search, store_select_category, store_set_search, store_toggle_sidebar, use_ui_store,
    UiStateStoreFields,
};

/// One entry in the category list; `None` is "All Categories"
#[component]
fn CategoryButton(label: String, value: Option<String>) -> impl IntoView {
    let store = use_ui_store();
    let compare = value.clone();
    let is_selected = move || store.selected_category().with(|current| *current == compare);
    let is_open = move || store.sidebar_open().get();

    view! {
        <button
            class=move || if is_selected() { "category-btn selected" } else { "category-btn" }
            class:hidden=move || !is_open()
            on:click=move |_| store_select_category(&store, value.clone())
        >
            {label}
        </button>
    }
}

#[component]
pub fn Sidebar(categories: Memo<Vec<String>>) -> impl IntoView {
    let store = use_ui_store();
    let is_open = move || store.sidebar_open().get();
    let has_query = move || !store.search_query().with(String::is_empty);

    view! {
        <aside class=move || if is_open() { "sidebar open" } else { "sidebar collapsed" }>
            <button
                class="sidebar-toggle"
                aria-label=move || if is_open() { "Collapse sidebar" } else { "Expand sidebar" }
                on:click=move |_| store_toggle_sidebar(&store)
            >
                {move || if is_open() { "‹" } else { "›" }}
            </button>

            <div class="sidebar-search">
                <input
                    type="text"
                    class:collapsed=move || !is_open()
                    placeholder=move || if is_open() { "Search by date or category..." } else { "" }
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                />
                <Show when=move || has_query() && is_open()>
                    <button
                        class="clear-search"
                        aria-label="Clear search"
                        on:click=move |_| store_clear_search(&store)
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <div class="sidebar-categories">
                <h2 class:hidden=move || !is_open()>"Categories"</h2>
                <CategoryButton label="All Categories".to_string() value=None />
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        view! { <CategoryButton label=category.clone() value=Some(category) /> }
                    }
                />
            </div>
        </aside>
    }
}
