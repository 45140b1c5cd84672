//! The eBay Sell Feed API.
//!
//! The Feed API lets sellers upload input files, download reports and files
//! including their status, filter reports using URI parameters, and retrieve
//! customer service metrics task details.
//!
//! [`Feed`] maps each endpoint to one method. It is composed over any
//! [`RestTransport`] and returns the transport's result unmodified: no
//! retries, no response parsing, no error translation.
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_feed::clients::RestClient;
//! use ebay_feed::{AccessToken, Feed, FeedConfig, FeedParams};
//!
//! let config = FeedConfig::builder()
//!     .access_token(AccessToken::new("v^1.1#...")?)
//!     .build()?;
//! let feed = Feed::new(RestClient::new(&config));
//!
//! let tasks = feed
//!     .get_order_tasks(Some(FeedParams::new().feed_type("LMS_ORDER_REPORT").limit(10)))
//!     .await?;
//! println!("{}", tasks.body);
//! ```

mod params;
mod types;

pub use params::FeedParams;
pub use types::{
    CreateInventoryTaskRequest, CreateOrderTaskRequest, CreateServiceMetricsTaskRequest,
    CreateTaskRequest, CreateUserScheduleRequest, CustomerServiceMetricsFilterCriteria, DateRange,
    FeedRequest, InventoryFilterCriteria, OrderFilterCriteria, UpdateUserScheduleRequest,
};

use serde_json::Value;

use crate::clients::{
    HttpError, HttpResponse, MultipartForm, RequestBody, RequestOptions, RestTransport,
};

/// Base path of the Feed API.
pub const FEED_BASE_PATH: &str = "/sell/feed/v1";

/// The Feed API surface.
///
/// Identifiers are percent-encoded before they are placed in a path, so IDs
/// containing `/`, `?` or `#` address the intended resource. They are not
/// otherwise validated; an empty ID produces an empty path segment.
///
/// `Feed` holds no mutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    transport: T,
    base_path: String,
}

impl<T: RestTransport> Feed<T> {
    /// Creates a Feed API surface over `transport`, rooted at [`FEED_BASE_PATH`].
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_path: FEED_BASE_PATH.to_string(),
        }
    }

    /// Replaces the base path, e.g. to target a different API version.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Returns the base path every endpoint is resolved against.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    // ========================================================================
    // Order tasks
    // ========================================================================

    /// Returns the details and status of order tasks, filtered by feed type
    /// or schedule.
    ///
    /// Sends every filter in `params`.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_order_tasks(
        &self,
        params: Option<FeedParams>,
    ) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().task_query();
        self.transport
            .get(&self.path("/order_task"), RequestOptions::with_query(query))
            .await
    }

    /// Creates an order download task with filter criteria for the order report.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn create_order_task(&self, body: Value) -> Result<HttpResponse, HttpError> {
        self.post_json("/order_task", body, RequestOptions::new())
            .await
    }

    /// Retrieves the details and status of an order task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_order_task(&self, task_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/order_task/{}", encode(task_id)))
            .await
    }

    // ========================================================================
    // Inventory tasks
    // ========================================================================

    /// Searches inventory tasks of a feed type, with date filters and paging.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_inventory_tasks(
        &self,
        params: Option<FeedParams>,
    ) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().task_query();
        self.transport
            .get(&self.path("/inventory_task"), RequestOptions::with_query(query))
            .await
    }

    /// Creates an inventory download task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn create_inventory_task(&self, body: Value) -> Result<HttpResponse, HttpError> {
        self.post_json("/inventory_task", body, RequestOptions::new())
            .await
    }

    /// Retrieves the details and status of an inventory task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_inventory_task(&self, task_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/inventory_task/{}", encode(task_id)))
            .await
    }

    // ========================================================================
    // Schedules
    // ========================================================================

    /// Lists schedules. Only `feed_type`, `limit` and `offset` are sent.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_schedules(
        &self,
        params: Option<FeedParams>,
    ) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().schedule_query();
        self.transport
            .get(&self.path("/schedule"), RequestOptions::with_query(query))
            .await
    }

    /// Creates a schedule, a subscription to a schedule template.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn create_schedule(&self, body: Value) -> Result<HttpResponse, HttpError> {
        self.post_json("/schedule", body, RequestOptions::new())
            .await
    }

    /// Retrieves the details and status of a schedule.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_schedule(&self, schedule_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/schedule/{}", encode(schedule_id)))
            .await
    }

    /// Updates a schedule. `None` sends the PUT without a body.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn update_schedule(
        &self,
        schedule_id: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        let path = self.path(&format!("/schedule/{}", encode(schedule_id)));
        self.transport
            .put(&path, body.map(RequestBody::Json), RequestOptions::new())
            .await
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn delete_schedule(&self, schedule_id: &str) -> Result<HttpResponse, HttpError> {
        let path = self.path(&format!("/schedule/{}", encode(schedule_id)));
        self.transport.delete(&path, RequestOptions::new()).await
    }

    /// Downloads the latest result file generated by a schedule.
    ///
    /// The file is in [`HttpResponse::bytes`].
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_latest_result_file(
        &self,
        schedule_id: &str,
    ) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!(
            "/schedule/{}/download_result_file",
            encode(schedule_id)
        ))
        .await
    }

    // ========================================================================
    // Schedule templates
    // ========================================================================

    /// Retrieves a schedule template.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_schedule_template(
        &self,
        schedule_template_id: &str,
    ) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!(
            "/schedule_template/{}",
            encode(schedule_template_id)
        ))
        .await
    }

    /// Lists schedule templates. Only `feed_type`, `limit` and `offset` are sent.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_schedule_templates(
        &self,
        params: Option<FeedParams>,
    ) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().schedule_query();
        self.transport
            .get(&self.path("/schedule_template"), RequestOptions::with_query(query))
            .await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// Lists tasks, filtered by feed type or schedule.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_tasks(&self, params: Option<FeedParams>) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().task_query();
        self.transport
            .get(&self.path("/task"), RequestOptions::with_query(query))
            .await
    }

    /// Creates an upload task or a download task without filter criteria.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn create_task(&self, body: Value) -> Result<HttpResponse, HttpError> {
        self.post_json("/task", body, RequestOptions::new()).await
    }

    /// Downloads the file previously uploaded with [`upload_file`](Self::upload_file).
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_input_file(&self, task_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/task/{}/download_input_file", encode(task_id)))
            .await
    }

    /// Downloads the file generated for a task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_result_file(&self, task_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/task/{}/download_result_file", encode(task_id)))
            .await
    }

    /// Retrieves the details and status of a task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_task(&self, task_id: &str) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!("/task/{}", encode(task_id))).await
    }

    /// Uploads the input file of a task.
    ///
    /// The transport's multipart header is always sent. Build the form with
    /// [`MultipartForm::file_upload`].
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn upload_file(
        &self,
        task_id: &str,
        form: MultipartForm,
    ) -> Result<HttpResponse, HttpError> {
        let path = self.path(&format!("/task/{}/upload_file", encode(task_id)));
        let options = RequestOptions::new().headers(self.transport.multipart_header());
        self.transport
            .post(&path, Some(RequestBody::Multipart(form)), options)
            .await
    }

    // ========================================================================
    // Customer service metric tasks
    // ========================================================================

    /// Lists customer service metric tasks. Every filter but `schedule_id` is sent.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_customer_service_metric_tasks(
        &self,
        params: Option<FeedParams>,
    ) -> Result<HttpResponse, HttpError> {
        let query = params.unwrap_or_default().metric_task_query();
        self.transport
            .get(
                &self.path("/customer_service_metric_task"),
                RequestOptions::with_query(query),
            )
            .await
    }

    /// Creates a customer service metrics download task.
    ///
    /// `accept_language` is sent as the `accept-language` header and selects
    /// the natural language of the report.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn create_customer_service_metric_task(
        &self,
        accept_language: &str,
        body: Value,
    ) -> Result<HttpResponse, HttpError> {
        let options = RequestOptions::new().header("accept-language", accept_language);
        self.post_json("/customer_service_metric_task", body, options)
            .await
    }

    /// Retrieves a customer service metric task.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unmodified.
    pub async fn get_customer_service_metric_task(
        &self,
        task_id: &str,
    ) -> Result<HttpResponse, HttpError> {
        self.get_plain(&format!(
            "/customer_service_metric_task/{}",
            encode(task_id)
        ))
        .await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn path(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_path)
    }

    async fn get_plain(&self, endpoint: &str) -> Result<HttpResponse, HttpError> {
        self.transport
            .get(&self.path(endpoint), RequestOptions::new())
            .await
    }

    async fn post_json(
        &self,
        endpoint: &str,
        body: Value,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.transport
            .post(&self.path(endpoint), Some(RequestBody::Json(body)), options)
            .await
    }
}

/// Percent-encodes a path segment.
fn encode(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}
