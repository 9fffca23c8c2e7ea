//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::TimelineConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct FeedContext {
    config: StoredValue<TimelineConfig>,
}

impl FeedContext {
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> TimelineConfig {
        self.config.get_value()
    }

    /// Base URL that relative media paths are joined to
    pub fn media_base_url(&self) -> String {
        self.config.with_value(|c| c.media_base_url.clone())
    }
}

pub fn use_feed_context() -> FeedContext {
    expect_context::<FeedContext>()
}
