//! Timeline Card Component
//!
//! One feed entry: optional image, title, description, icon + date footer
//! and a Listen button when the item carries audio.

use leptos::prelude::*;

use crate::context::use_feed_context;
use crate::models::TimelineItem;
use crate::store::{store_select_audio, use_ui_store};

#[component]
pub fn TimelineCard(item: TimelineItem) -> impl IntoView {
    let store = use_ui_store();
    let base = use_feed_context().media_base_url();

    let image_url = item.image_url(&base);
    let icon_url = item.icon_url(&base);
    let audio_url = item.audio_url(&base);
    let alt = item.title.clone().unwrap_or_else(|| "Timeline Image".to_string());
    let description = item.description.clone().filter(|d| !d.is_empty());

    view! {
        <article class="timeline-card">
            {image_url.map(|src| view! {
                <img class="card-image" src=src alt=alt loading="lazy" />
            })}
            <div class="card-body">
                <h3 class="card-title">{item.title.clone()}</h3>
                {description.map(|text| view! { <p class="card-description">{text}</p> })}
                <div class="card-footer">
                    <div class="card-meta">
                        {icon_url.map(|src| view! { <img class="card-icon" src=src alt="Icon" /> })}
                        <span class="card-date">{item.create_date.clone()}</span>
                    </div>
                    {audio_url.map(|url| view! {
                        <button
                            class="listen-btn"
                            aria-label="Listen to audio"
                            on:click=move |_| store_select_audio(&store, Some(url.clone()))
                        >
                            "🔊 Listen"
                        </button>
                    })}
                </div>
            </div>
        </article>
    }
}
