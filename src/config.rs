//! Runtime Configuration
//!
//! Endpoint and media locations plus paging knobs. The host page may override
//! any field by defining `window.__TIMELINE_CONFIG__` before the bundle loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::filter::SearchMode;
use crate::reveal::PAGE_SIZE;

/// Name of the optional JS global holding overrides
pub const CONFIG_GLOBAL: &str = "__TIMELINE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub api_base_url: String,
    pub timeline_endpoint: String,
    pub media_base_url: String,
    pub page_size: usize,
    pub load_more_delay_ms: u32,
    pub search_mode: SearchMode,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://arthurfrost.qflo.co.za/php/".to_string(),
            timeline_endpoint: "getTimeline.php".to_string(),
            media_base_url: "https://arthurfrost.qflo.co.za/".to_string(),
            page_size: PAGE_SIZE,
            load_more_delay_ms: 300,
            search_mode: SearchMode::default(),
        }
    }
}

impl TimelineConfig {
    /// Absolute URL of the timeline endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.timeline_endpoint.trim_start_matches('/')
        )
    }

    /// Page size never drops below one
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Read overrides from `window.__TIMELINE_CONFIG__`, falling back to defaults.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) => Self::from_js(value),
            Err(_) => Self::default(),
        }
    }

    fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => {
                log::info!("[Config] using overrides from window.{}", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                log::warn!("[Config] ignoring invalid window.{}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimelineConfig::default();
        assert_eq!(config.endpoint_url(), "https://arthurfrost.qflo.co.za/php/getTimeline.php");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.load_more_delay_ms, 300);
        assert_eq!(config.search_mode, SearchMode::DateOrCategory);
    }

    #[test]
    fn test_endpoint_url_joins_with_single_slash() {
        let config = TimelineConfig {
            api_base_url: "http://localhost:8080/api".to_string(),
            timeline_endpoint: "/getTimeline.php".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "http://localhost:8080/api/getTimeline.php");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{"media_base_url":"http://localhost/media/","search_mode":"date_prefix"}"#;
        let config: TimelineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.media_base_url, "http://localhost/media/");
        assert_eq!(config.search_mode, SearchMode::DatePrefix);
        assert_eq!(config.timeline_endpoint, "getTimeline.php");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = TimelineConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_page_size(), 1);
    }
}
