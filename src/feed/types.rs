//! Request bodies accepted by the Feed API.
//!
//! Feed operations take a `serde_json::Value`. These types give the common
//! payloads a typed shape; call [`FeedRequest::to_body`] to turn one into
//! the value a [`Feed`](crate::feed::Feed) call expects. Wire names are
//! camelCase as documented by eBay; unset fields are omitted.
//!
//! # Example
//!
//! ```rust
//! use ebay_feed::feed::{CreateOrderTaskRequest, DateRange, FeedRequest, OrderFilterCriteria};
//! use serde_json::json;
//!
//! let request = CreateOrderTaskRequest {
//!     feed_type: "LMS_ORDER_REPORT".to_string(),
//!     schema_version: Some("1113".to_string()),
//!     filter_criteria: Some(OrderFilterCriteria {
//!         creation_date_range: Some(DateRange {
//!             from: Some("2024-05-01T00:00:00.000Z".to_string()),
//!             to: None,
//!         }),
//!         ..Default::default()
//!     }),
//! };
//!
//! assert_eq!(
//!     request.to_body().unwrap(),
//!     json!({
//!         "feedType": "LMS_ORDER_REPORT",
//!         "schemaVersion": "1113",
//!         "filterCriteria": {"creationDateRange": {"from": "2024-05-01T00:00:00.000Z"}}
//!     })
//! );
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A request payload that can be sent as a JSON body.
pub trait FeedRequest: Serialize {
    /// Serializes the payload into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if the payload cannot be represented as JSON.
    fn to_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// A date range filter with ISO 8601 bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl DateRange {
    /// Creates a closed range from two UTC timestamps, formatted with milliseconds.
    #[must_use]
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from.to_rfc3339_opts(SecondsFormat::Millis, true)),
            to: Some(to.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Filters for an order report task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilterCriteria {
    /// Orders created within this range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_range: Option<DateRange>,
    /// Orders modified within this range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_range: Option<DateRange>,
    /// Order status, e.g. `ACTIVE` or `COMPLETED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
}

/// Body of `create_order_task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderTaskRequest {
    /// The report feed type, e.g. `LMS_ORDER_REPORT`.
    pub feed_type: String,
    /// Schema version of the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Report filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<OrderFilterCriteria>,
}

impl FeedRequest for CreateOrderTaskRequest {}

/// Filters for an inventory report task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilterCriteria {
    /// Listing format, e.g. `FIXED_PRICE` or `AUCTION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_format: Option<String>,
}

/// Body of `create_inventory_task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryTaskRequest {
    /// The feed type, e.g. `LMS_ACTIVE_INVENTORY_REPORT`.
    pub feed_type: String,
    /// Schema version of the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Report filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<InventoryFilterCriteria>,
}

impl FeedRequest for CreateInventoryTaskRequest {}

/// Body of `create_schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserScheduleRequest {
    /// The feed type of the template being subscribed to.
    pub feed_type: String,
    /// The template this schedule instantiates.
    pub schedule_template_id: String,
    /// Day of the month the report is generated, for monthly schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_day_of_month: Option<u32>,
    /// Day of the week the report is generated, for weekly schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_day_of_week: Option<String>,
    /// Hour of the day, as `HH:00Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_hour: Option<String>,
    /// When the schedule stops producing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end_date: Option<String>,
    /// Free-form schedule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    /// When the schedule starts producing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start_date: Option<String>,
    /// Schema version of the generated reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}

impl FeedRequest for CreateUserScheduleRequest {}

/// Body of `update_schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserScheduleRequest {
    /// Day of the month the report is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_day_of_month: Option<u32>,
    /// Day of the week the report is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_day_of_week: Option<String>,
    /// Hour of the day, as `HH:00Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_trigger_hour: Option<String>,
    /// When the schedule stops producing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end_date: Option<String>,
    /// Free-form schedule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    /// When the schedule starts producing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start_date: Option<String>,
    /// Schema version of the generated reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}

impl FeedRequest for UpdateUserScheduleRequest {}

/// Body of `create_task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// The feed type, e.g. `LMS_ADD_FIXED_PRICE_ITEM`.
    pub feed_type: String,
    /// Schema version of the uploaded or generated file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}

impl FeedRequest for CreateTaskRequest {}

/// Filters for a customer service metrics report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerServiceMetricsFilterCriteria {
    /// Metric type, `ITEM_NOT_AS_DESCRIBED` or `ITEM_NOT_RECEIVED`.
    pub customer_service_metric_type: String,
    /// Marketplace the seller is evaluated on, e.g. `EBAY_US`.
    pub evaluation_marketplace_id: String,
    /// Category IDs to restrict the report to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_categories: Option<Vec<String>>,
    /// Shipping regions to restrict the report to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_regions: Option<Vec<String>>,
}

/// Body of `create_customer_service_metric_task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceMetricsTaskRequest {
    /// The feed type, `CUSTOMER_SERVICE_METRICS_REPORT`.
    pub feed_type: String,
    /// Report filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<CustomerServiceMetricsFilterCriteria>,
}

impl FeedRequest for CreateServiceMetricsTaskRequest {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_date_range_between_uses_millis() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
        let range = DateRange::between(from, to);

        assert_eq!(range.from.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(range.to.as_deref(), Some("2024-01-02T06:00:00.000Z"));
    }

    #[test]
    fn test_create_task_body_minimal() {
        let body = CreateTaskRequest {
            feed_type: "LMS_ADD_FIXED_PRICE_ITEM".to_string(),
            schema_version: None,
        }
        .to_body()
        .unwrap();

        assert_eq!(body, json!({"feedType": "LMS_ADD_FIXED_PRICE_ITEM"}));
    }

    #[test]
    fn test_create_schedule_body_field_names() {
        let body = CreateUserScheduleRequest {
            feed_type: "LMS_ORDER_REPORT".to_string(),
            schedule_template_id: "template-1".to_string(),
            preferred_trigger_day_of_month: Some(5),
            preferred_trigger_hour: Some("10:00Z".to_string()),
            ..Default::default()
        }
        .to_body()
        .unwrap();

        assert_eq!(
            body,
            json!({
                "feedType": "LMS_ORDER_REPORT",
                "scheduleTemplateId": "template-1",
                "preferredTriggerDayOfMonth": 5,
                "preferredTriggerHour": "10:00Z"
            })
        );
    }

    #[test]
    fn test_empty_update_schedule_body_is_empty_object() {
        let body = UpdateUserScheduleRequest::default().to_body().unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_service_metrics_body() {
        let body = CreateServiceMetricsTaskRequest {
            feed_type: "CUSTOMER_SERVICE_METRICS_REPORT".to_string(),
            filter_criteria: Some(CustomerServiceMetricsFilterCriteria {
                customer_service_metric_type: "ITEM_NOT_RECEIVED".to_string(),
                evaluation_marketplace_id: "EBAY_US".to_string(),
                listing_categories: None,
                shipping_regions: Some(vec!["DOMESTIC".to_string()]),
            }),
        }
        .to_body()
        .unwrap();

        assert_eq!(
            body["filterCriteria"],
            json!({
                "customerServiceMetricType": "ITEM_NOT_RECEIVED",
                "evaluationMarketplaceId": "EBAY_US",
                "shippingRegions": ["DOMESTIC"]
            })
        );
    }

    #[test]
    fn test_inventory_task_deserializes_from_camel_case() {
        let parsed: CreateInventoryTaskRequest = serde_json::from_value(json!({
            "feedType": "LMS_ACTIVE_INVENTORY_REPORT",
            "filterCriteria": {"listingFormat": "FIXED_PRICE"}
        }))
        .unwrap();

        assert_eq!(parsed.feed_type, "LMS_ACTIVE_INVENTORY_REPORT");
        assert_eq!(
            parsed.filter_criteria.unwrap().listing_format.as_deref(),
            Some("FIXED_PRICE")
        );
    }
}
