//! HTTP Timeline Source
//!
//! `GET <api_base_url>/<endpoint>` through the browser's `fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::TimelineSource;
use crate::config::TimelineConfig;
use crate::error::LoadError;

#[derive(Debug, Clone)]
pub struct HttpTimelineSource {
    url: String,
}

impl HttpTimelineSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.endpoint_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn transport(e: JsValue) -> LoadError {
    LoadError::Transport(format!("{:?}", e))
}

#[async_trait(?Send)]
impl TimelineSource for HttpTimelineSource {
    async fn fetch_body(&self) -> Result<String, LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&self.url, &opts).map_err(transport)?;
        request.headers().set("Accept", "application/json").map_err(transport)?;

        log::debug!("[Http] GET {}", self.url);
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        if !response.ok() {
            log::error!("[Http] GET {} returned {}", self.url, response.status());
            return Err(LoadError::Transport(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        body.as_string()
            .ok_or_else(|| LoadError::MalformedResponse("response body is not text".to_string()))
    }
}
