//! Load Sentinel Component
//!
//! Invisible end-of-list marker. Calls `on_visible` whenever it scrolls into
//! view; the timeline hook decides whether that actually loads anything.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the sentinel that must be visible
const VISIBLE_THRESHOLD: f64 = 0.1;
/// Look-ahead around the viewport
const ROOT_MARGIN: &str = "100px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[component]
pub fn LoadSentinel(#[prop(into)] on_visible: Callback<()>) -> impl IntoView {
    let sentinel_ref = NodeRef::<Div>::new();
    // Closure is kept alongside the observer so it outlives every callback
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(el) = sentinel_ref.get() else { return };
        if observer.with_value(|o| o.is_some()) {
            return;
        }

        let callback = ObserverCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible.run(());
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(obs) => {
                obs.observe(&el);
                observer.set_value(Some((obs, callback)));
            }
            Err(e) => log::error!("[Sentinel] cannot create observer: {:?}", e),
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|o| {
            if let Some((obs, _callback)) = o.take() {
                obs.disconnect();
            }
        });
    });

    view! { <div node_ref=sentinel_ref class="load-sentinel"></div> }
}
