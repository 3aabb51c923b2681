//! Widget configuration provided by the host through Leptos context.

use std::time::Duration;

pub const DEFAULT_QUERY_ENDPOINT: &str = "/rag/query";
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Path or URL the widget posts queries to.
    pub endpoint: String,
    /// Deadline for a single query; expiry is reported as a timeout.
    pub timeout: Duration,
    /// Delay before scrolling so newly appended turns have been laid out.
    pub scroll_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_QUERY_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            scroll_delay: Duration::from_millis(DEFAULT_SCROLL_DELAY_MS),
        }
    }
}
