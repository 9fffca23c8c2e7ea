//! Timeline Data Source
//!
//! The network seam of the data store. `TimelineSource` fetches the raw body;
//! `load_timeline` validates the envelope and decodes the items.

mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoadError;
use crate::models::{TimelineItem, TimelineResponse};

pub use http::HttpTimelineSource;

/// Anything that can produce the raw timeline payload.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TimelineSource: Send + Sync {
    /// Fetch the response body. Only transport failures are errors here.
    async fn fetch_body(&self) -> Result<String, LoadError>;
}

/// Fetch and decode the full collection once.
pub async fn load_timeline(source: &dyn TimelineSource) -> Result<Vec<TimelineItem>, LoadError> {
    let body = source.fetch_body().await?;
    let items = decode_envelope(&body)?;
    log::info!("[Timeline] loaded {} items", items.len());
    Ok(items)
}

/// Validate `{ "Timeline": [...] }` and decode its items.
pub fn decode_envelope(body: &str) -> Result<Vec<TimelineItem>, LoadError> {
    let value: Value = serde_json::from_str(body)?;

    match value.get("Timeline") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(LoadError::MalformedResponse("`Timeline` is not an array".to_string()));
        }
        None => {
            return Err(LoadError::MalformedResponse("missing `Timeline` field".to_string()));
        }
    }

    let response: TimelineResponse = serde_json::from_value(value)?;
    Ok(response.timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use futures::executor::block_on;

    /// In-memory source returning a canned body or failure
    struct StubSource(Result<String, LoadError>);

    #[async_trait(?Send)]
    impl TimelineSource for StubSource {
        async fn fetch_body(&self) -> Result<String, LoadError> {
            self.0.clone()
        }
    }

    fn january_body(days: u32) -> String {
        let items: Vec<Value> = (1..=days)
            .map(|day| {
                serde_json::json!({
                    "Id": day,
                    "Title": format!("Day {}", day),
                    "CreateDate": format!("{:02} Jan 2021", day),
                    "Category": "X",
                })
            })
            .collect();
        serde_json::json!({ "Timeline": items }).to_string()
    }

    #[test]
    fn test_load_well_formed_envelope() {
        let source = StubSource(Ok(january_body(25)));
        let items = block_on(load_timeline(&source)).expect("load");

        assert_eq!(items.len(), 25);
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[24].create_date, "25 Jan 2021");
    }

    #[test]
    fn test_timeline_not_an_array() {
        let source = StubSource(Ok(r#"{"Timeline":"not-an-array"}"#.to_string()));
        let err = block_on(load_timeline(&source)).unwrap_err();

        assert!(!err.is_transport());
        assert_eq!(err.user_message(), "Invalid data received from server");
    }

    #[test]
    fn test_missing_timeline_field() {
        let err = decode_envelope(r#"{"Items":[]}"#).unwrap_err();
        assert_eq!(err, LoadError::MalformedResponse("missing `Timeline` field".to_string()));

        let err = decode_envelope("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = decode_envelope("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));
    }

    #[test]
    fn test_item_missing_category_is_malformed() {
        let err = decode_envelope(r#"{"Timeline":[{"Id":1,"CreateDate":"01 Jan 2021"}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::MalformedResponse(_)));
    }

    #[test]
    fn test_transport_failure_passes_through() {
        let source = StubSource(Err(LoadError::Transport("network down".to_string())));
        let err = block_on(load_timeline(&source)).unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.user_message(), "Failed to fetch timeline data");
        assert_eq!(err.to_string(), "transport error: network down");
    }

    #[test]
    fn test_empty_timeline_is_valid() {
        assert!(decode_envelope(r#"{"Timeline":[]}"#).unwrap().is_empty());
    }
}
