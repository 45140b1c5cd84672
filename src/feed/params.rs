//! Filter configuration for the Feed API's listing calls.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Optional filters for listing tasks, schedules and templates.
///
/// Every field is independent; fields left as `None` are omitted from the
/// query string. Each listing call only sends the filters its endpoint
/// accepts (see [`Feed`](crate::feed::Feed)).
///
/// # Example
///
/// ```rust
/// use ebay_feed::FeedParams;
///
/// let params = FeedParams::new().feed_type("LMS_ORDER_REPORT").limit(10);
/// assert_eq!(params.feed_type.as_deref(), Some("LMS_ORDER_REPORT"));
/// assert!(params.offset.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedParams {
    /// Task creation date range, `from..to` in ISO 8601 with milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,

    /// The feed type associated with the task or schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_type: Option<String>,

    /// Maximum number of entries per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of previous days to search. Not combined with `date_range`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_back_days: Option<u32>,

    /// Number of entries to skip before the first returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// The schedule that generated the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
}

impl FeedParams {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw `date_range` value.
    #[must_use]
    pub fn date_range(mut self, range: impl Into<String>) -> Self {
        self.date_range = Some(range.into());
        self
    }

    /// Sets `date_range` from two UTC timestamps.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use ebay_feed::FeedParams;
    ///
    /// let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    /// let to = Utc.with_ymd_and_hms(2024, 3, 8, 12, 30, 0).unwrap();
    /// let params = FeedParams::new().date_range_between(from, to);
    ///
    /// assert_eq!(
    ///     params.date_range.as_deref(),
    ///     Some("2024-03-01T00:00:00.000Z..2024-03-08T12:30:00.000Z")
    /// );
    /// ```
    #[must_use]
    pub fn date_range_between(self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let from = from.to_rfc3339_opts(SecondsFormat::Millis, true);
        let to = to.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.date_range(format!("{from}..{to}"))
    }

    /// Sets the feed type.
    #[must_use]
    pub fn feed_type(mut self, feed_type: impl Into<String>) -> Self {
        self.feed_type = Some(feed_type.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of days to look back.
    #[must_use]
    pub const fn look_back_days(mut self, days: u32) -> Self {
        self.look_back_days = Some(days);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the schedule ID.
    #[must_use]
    pub fn schedule_id(mut self, schedule_id: impl Into<String>) -> Self {
        self.schedule_id = Some(schedule_id.into());
        self
    }

    /// Query for task listings: every filter.
    pub(crate) fn task_query(&self) -> HashMap<String, String> {
        let mut query = self.metric_task_query();
        insert(&mut query, "schedule_id", self.schedule_id.as_ref());
        query
    }

    /// Query for schedule and schedule template listings.
    pub(crate) fn schedule_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        insert(&mut query, "feed_type", self.feed_type.as_ref());
        insert(&mut query, "limit", self.limit);
        insert(&mut query, "offset", self.offset);
        query
    }

    /// Query for customer service metric task listings: everything but `schedule_id`.
    pub(crate) fn metric_task_query(&self) -> HashMap<String, String> {
        let mut query = self.schedule_query();
        insert(&mut query, "date_range", self.date_range.as_ref());
        insert(&mut query, "look_back_days", self.look_back_days);
        query
    }
}

fn insert<V: ToString>(query: &mut HashMap<String, String>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        query.insert(key.to_string(), value.to_string());
    }
}
