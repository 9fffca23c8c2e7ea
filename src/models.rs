//! Frontend Models
//!
//! Data structures matching the timeline endpoint's JSON payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier; the endpoint sends either form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// One feed entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimelineItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub create_date: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

impl TimelineItem {
    pub fn image_url(&self, media_base_url: &str) -> Option<String> {
        non_empty(&self.image).map(|path| media_url(media_base_url, path))
    }

    pub fn icon_url(&self, media_base_url: &str) -> Option<String> {
        non_empty(&self.icon).map(|path| media_url(media_base_url, path))
    }

    pub fn audio_url(&self, media_base_url: &str) -> Option<String> {
        non_empty(&self.audio).map(|path| media_url(media_base_url, path))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Wire envelope: `{ "Timeline": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResponse {
    #[serde(rename = "Timeline")]
    pub timeline: Vec<TimelineItem>,
}

/// Search/category criteria owned by the UI layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub selected_category: Option<String>,
}

impl FilterCriteria {
    pub fn new(search_query: impl Into<String>, selected_category: Option<String>) -> Self {
        Self {
            search_query: search_query.into(),
            selected_category,
        }
    }

    /// True when either a text query or a category narrows the feed
    pub fn is_active(&self) -> bool {
        !self.search_query.trim().is_empty() || self.selected_category.is_some()
    }
}

/// Build an absolute asset URL from a relative media path.
///
/// Only the first backslash is turned into a forward slash.
pub fn media_url(media_base_url: &str, path: &str) -> String {
    format!("{}{}", media_base_url, path.replacen('\\', "/", 1))
}
