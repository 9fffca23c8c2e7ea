//! Error Panel Component

use leptos::prelude::*;

use crate::error::LoadError;

/// Recent log lines shown under the error
const DIAGNOSTIC_LINES: usize = 20;

/// User-facing message with the technical detail and recent log lines folded away
#[component]
pub fn ErrorPanel(error: LoadError) -> impl IntoView {
    let recent = console_logger::recent_lines(DIAGNOSTIC_LINES).join("\n");
    let kind = if error.is_transport() { "error-panel transport" } else { "error-panel malformed" };

    view! {
        <div class=kind role="alert">
            <span class="error-message">{error.user_message()}</span>
            <details class="error-details">
                <summary>"Details"</summary>
                <p>{error.to_string()}</p>
                <pre class="error-log">{recent}</pre>
            </details>
        </div>
    }
}
