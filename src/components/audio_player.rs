//! Audio Player Component
//!
//! Modal overlay playing the selected clip. A new URL mounts a fresh
//! `<audio>` element so playback restarts.

use leptos::prelude::*;

use crate::store::{store_select_audio, use_ui_store, UiStateStoreFields};

#[component]
pub fn AudioPlayer() -> impl IntoView {
    let store = use_ui_store();

    move || {
        store.selected_audio().get().map(|url| {
            view! {
                <div class="audio-overlay">
                    <div class="audio-dialog">
                        <audio class="audio-element" src=url controls=true autoplay=true></audio>
                        <button
                            class="audio-close"
                            aria-label="Close audio player"
                            on:click=move |_| store_select_audio(&store, None)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
