//! HTTP request types for the eBay Feed API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! request body types including multipart forms for file uploads.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Feed API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Multipart form content type (`multipart/form-data`).
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_content_type())
    }
}

/// A file attached to a [`MultipartForm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name.
    pub field_name: String,
    /// File name reported in the part's `Content-Disposition`.
    pub file_name: String,
    /// MIME type of the part, if known.
    pub mime_type: Option<String>,
    /// File contents.
    pub content: Vec<u8>,
}

/// A `multipart/form-data` request body.
///
/// # Example
///
/// ```rust
/// use ebay_feed::clients::MultipartForm;
///
/// let form = MultipartForm::new()
///     .text("fileName", "listings.xml")
///     .file("file", "listings.xml", b"<xml/>".to_vec());
///
/// assert_eq!(form.text_fields().len(), 1);
/// assert_eq!(form.files().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    text: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the form expected by the Feed API's `upload_file` call.
    ///
    /// The form carries the `fileName`, `name` and `type` text fields and the
    /// file itself in the `file` part.
    #[must_use]
    pub fn file_upload(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self::new()
            .text("fileName", file_name.clone())
            .text("name", "file")
            .text("type", "form-data")
            .file("file", file_name, content)
    }

    /// Adds a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.push((name.into(), value.into()));
        self
    }

    /// Adds a file part without an explicit MIME type.
    #[must_use]
    pub fn file(
        mut self,
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        self.files.push(FilePart {
            field_name: field_name.into(),
            file_name: file_name.into(),
            mime_type: None,
            content,
        });
        self
    }

    /// Adds a fully specified file part.
    #[must_use]
    pub fn part(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    /// Returns the text fields in insertion order.
    #[must_use]
    pub fn text_fields(&self) -> &[(String, String)] {
        &self.text
    }

    /// Returns the file parts in insertion order.
    #[must_use]
    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    /// Returns the first file MIME type reqwest would refuse.
    fn invalid_mime_type(&self) -> Option<&str> {
        self.files
            .iter()
            .filter_map(|file| file.mime_type.as_deref())
            .find(|mime| {
                reqwest::multipart::Part::bytes(Vec::new())
                    .mime_str(mime)
                    .is_err()
            })
    }
}

/// The payload of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// A multipart form.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Returns the [`DataType`] this body is naturally sent as.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Multipart(_) => DataType::Multipart,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Multipart(_) => "multipart",
        }
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<MultipartForm> for RequestBody {
    fn from(form: MultipartForm) -> Self {
        Self::Multipart(form)
    }
}

/// An HTTP request to be sent to the eBay API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use ebay_feed::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/sell/feed/v1/task")
///     .body(json!({"feedType": "LMS_ADD_ITEM"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.http_method, HttpMethod::Post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute path (below the API host) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// Bodiless POST and PUT requests are allowed; the Feed API accepts an
    /// empty schedule update.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `body_type` does not match the kind of `body`
    /// - a multipart file part has an unparseable MIME type
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let Some(body) = &self.body else {
            return Ok(());
        };

        let Some(body_type) = self.body_type else {
            return Err(InvalidHttpRequestError::MissingBodyType);
        };

        if body.data_type() != body_type {
            return Err(InvalidHttpRequestError::BodyTypeMismatch {
                body_type: body_type.to_string(),
                body_kind: body.kind(),
            });
        }

        if let RequestBody::Multipart(form) = body {
            if let Some(mime) = form.invalid_mime_type() {
                return Err(InvalidHttpRequestError::InvalidMimeType {
                    mime: mime.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    body_type: Option<DataType>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(DataType::Multipart.as_content_type(), "multipart/form-data");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/sell/feed/v1/task")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/sell/feed/v1/task");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
    }

    #[test]
    fn test_put_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Put, "/sell/feed/v1/schedule/1")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "/task")
            .body(json!({"key": "value"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_verify_rejects_multipart_sent_as_json() {
        let result = HttpRequest::builder(HttpMethod::Post, "/task/1/upload_file")
            .body(MultipartForm::file_upload("a.xml", vec![1, 2, 3]))
            .body_type(DataType::Json)
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyTypeMismatch { body_kind: "multipart", .. })
        ));
    }

    #[test]
    fn test_builder_with_query_params_and_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "/task")
            .query_param("limit", "10")
            .header("accept-language", "en-US")
            .build()
            .unwrap();

        assert_eq!(
            request.query.unwrap().get("limit"),
            Some(&"10".to_string())
        );
        assert_eq!(
            request.extra_headers.unwrap().get("accept-language"),
            Some(&"en-US".to_string())
        );
    }

    #[test]
    fn test_file_upload_form_layout() {
        let form = MultipartForm::file_upload("inventory.csv", b"sku,qty".to_vec());

        let names: Vec<&str> = form.text_fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["fileName", "name", "type"]);
        assert_eq!(form.text_fields()[0].1, "inventory.csv");

        let file = &form.files()[0];
        assert_eq!(file.field_name, "file");
        assert_eq!(file.file_name, "inventory.csv");
        assert_eq!(file.content, b"sku,qty".to_vec());
        assert!(file.mime_type.is_none());
    }

    #[test]
    fn test_part_with_valid_mime_type_passes_verify() {
        let form = MultipartForm::new().part(FilePart {
            field_name: "file".to_string(),
            file_name: "items.csv".to_string(),
            mime_type: Some("text/csv".to_string()),
            content: b"sku,qty".to_vec(),
        });
        assert_eq!(form.files()[0].mime_type.as_deref(), Some("text/csv"));

        let result = HttpRequest::builder(HttpMethod::Post, "/task/1/upload_file")
            .body(form)
            .body_type(DataType::Multipart)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_part_with_unparseable_mime_type_is_rejected() {
        let form = MultipartForm::new().part(FilePart {
            field_name: "file".to_string(),
            file_name: "items.xml".to_string(),
            mime_type: Some("not a mime".to_string()),
            content: b"<items/>".to_vec(),
        });

        let result = HttpRequest::builder(HttpMethod::Post, "/task/1/upload_file")
            .body(form)
            .body_type(DataType::Multipart)
            .build();

        assert_eq!(
            result.unwrap_err(),
            InvalidHttpRequestError::InvalidMimeType {
                mime: "not a mime".to_string()
            }
        );
    }

    #[test]
    fn test_request_body_conversions() {
        let body: RequestBody = json!({"a": 1}).into();
        assert_eq!(body.data_type(), DataType::Json);

        let body: RequestBody = MultipartForm::new().into();
        assert_eq!(body.data_type(), DataType::Multipart);
    }
}
