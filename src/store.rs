//! UI State Store
//!
//! Inputs owned by the UI layer, with field-level reactivity via
//! reactive_stores. The timeline core only ever reads these.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FilterCriteria;

#[derive(Clone, Debug, Store)]
pub struct UiState {
    /// Raw search box text
    pub search_query: String,
    /// None = all categories
    pub selected_category: Option<String>,
    /// Absolute URL of the clip in the audio overlay
    pub selected_audio: Option<String>,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: None,
            selected_audio: None,
            sidebar_open: true,
        }
    }
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Current criteria as a signal for the timeline hook
pub fn criteria_signal(store: UiStore) -> Signal<FilterCriteria> {
    Signal::derive(move || FilterCriteria {
        search_query: store.search_query().get(),
        selected_category: store.selected_category().get(),
    })
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_search(store: &UiStore, query: String) {
    store.search_query().set(query);
}

pub fn store_clear_search(store: &UiStore) {
    store.search_query().set(String::new());
}

pub fn store_select_category(store: &UiStore, category: Option<String>) {
    store.selected_category().set(category);
}

pub fn store_select_audio(store: &UiStore, url: Option<String>) {
    store.selected_audio().set(url);
}

pub fn store_toggle_sidebar(store: &UiStore) {
    store.sidebar_open().update(|open| *open = !*open);
}
