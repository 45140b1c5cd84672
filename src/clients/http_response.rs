//! HTTP response types for the eBay Feed API client.
//!
//! This module provides the [`HttpResponse`] type. Responses are returned to
//! the caller as received; the helpers here only read headers.

use std::collections::HashMap;

/// An HTTP response from the eBay API.
///
/// `body` holds the parsed JSON document. Downloads (input and result files)
/// are not JSON, so for those `body` is `Value::Null` and the payload is in
/// `bytes`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body, or `Value::Null` when empty or not JSON.
    pub body: serde_json::Value,
    /// The raw response payload.
    pub bytes: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `bytes` as JSON when possible.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, bytes: Vec<u8>) -> Self {
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        Self {
            code,
            headers,
            body,
            bytes,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the eBay request ID, if present.
    ///
    /// eBay reports it as `X-EBAY-C-REQUEST-ID`; `X-Request-Id` is used as a
    /// fallback.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ebay-c-request-id")
            .or_else(|| self.header("x-request-id"))
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `Location` header value, if present.
    ///
    /// Create calls answer `202 Accepted` and point at the new task or
    /// schedule through this header.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the last path segment of the `Location` header.
    ///
    /// For create calls this is the ID of the created resource.
    #[must_use]
    pub fn created_resource_id(&self) -> Option<&str> {
        self.location()
            .map(|loc| loc.split(['?', '#']).next().unwrap_or(loc))
            .and_then(|loc| loc.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    /// Returns the file name from the `Content-Disposition` header, if present.
    ///
    /// Downloaded files carry `attachment; filename="..."`. An RFC 6266
    /// `filename*=UTF-8''...` parameter wins over a plain `filename`.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        let disposition = self.header("content-disposition")?;
        let params = disposition_params(disposition);

        let extended = params
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case("filename*"))
            .find_map(|(_, value)| decode_ext_value(value));
        let plain = || {
            params
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("filename"))
                .map(|(_, value)| unquote(value))
        };

        extended.or_else(plain).filter(|name| !name.is_empty())
    }
}

/// Splits `Content-Disposition` parameters on `;` outside quoted strings.
fn disposition_params(header: &str) -> Vec<(&str, &str)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&header[start..]);

    segments
        .into_iter()
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

/// Strips surrounding quotes and backslash escapes from a parameter value.
fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Decodes an RFC 5987 `charset'language'value` parameter.
fn decode_ext_value(value: &str) -> Option<String> {
    let mut parts = value.splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;

    if charset.eq_ignore_ascii_case("utf-8") {
        urlencoding::decode(encoded).ok().map(std::borrow::Cow::into_owned)
    } else if charset.eq_ignore_ascii_case("iso-8859-1") {
        let bytes = urlencoding::decode_binary(encoded.as_bytes());
        Some(bytes.iter().map(|&b| char::from(b)).collect())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 409, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), Vec::new()).is_ok());
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            br#"{"tasks":[],"total":0}"#.to_vec(),
        );
        assert_eq!(response.body, json!({"tasks": [], "total": 0}));
    }

    #[test]
    fn test_binary_body_is_kept_raw() {
        let payload = vec![0x1f, 0x8b, 0x08, 0x00];
        let response = HttpResponse::new(200, HashMap::new(), payload.clone());
        assert_eq!(response.body, serde_json::Value::Null);
        assert_eq!(response.bytes, payload);
    }

    #[test]
    fn test_empty_body_is_null() {
        let response = HttpResponse::new(204, HashMap::new(), Vec::new());
        assert_eq!(response.body, serde_json::Value::Null);
    }

    #[test]
    fn test_request_id_prefers_ebay_header() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-ebay-c-request-id", "ebay-1"), ("x-request-id", "generic")]),
            Vec::new(),
        );
        assert_eq!(response.request_id(), Some("ebay-1"));

        let response = HttpResponse::new(200, headers(&[("x-request-id", "generic")]), Vec::new());
        assert_eq!(response.request_id(), Some("generic"));
    }

    #[test]
    fn test_created_resource_id_from_location() {
        let response = HttpResponse::new(
            202,
            headers(&[(
                "location",
                "https://api.ebay.com/sell/feed/v1/order_task/task-5-1234",
            )]),
            Vec::new(),
        );
        assert_eq!(response.created_resource_id(), Some("task-5-1234"));
    }

    #[test]
    fn test_created_resource_id_missing_location() {
        let response = HttpResponse::new(202, HashMap::new(), Vec::new());
        assert!(response.created_resource_id().is_none());
    }

    #[test]
    fn test_file_name_from_content_disposition() {
        let response = HttpResponse::new(
            200,
            headers(&[(
                "content-disposition",
                r#"attachment; filename="task-1_report.zip""#,
            )]),
            Vec::new(),
        );
        assert_eq!(response.file_name().as_deref(), Some("task-1_report.zip"));
    }

    #[test]
    fn test_file_name_prefers_extended_parameter() {
        let response = HttpResponse::new(
            200,
            headers(&[(
                "content-disposition",
                "attachment; filename=\"fallback.zip\"; filename*=UTF-8''r%C3%A9sultat%20final.zip",
            )]),
            Vec::new(),
        );
        assert_eq!(response.file_name().as_deref(), Some("résultat final.zip"));
    }

    #[test]
    fn test_file_name_latin1_extended_parameter() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-disposition", "attachment; filename*=iso-8859-1'en'%E9t%E9.csv")]),
            Vec::new(),
        );
        assert_eq!(response.file_name().as_deref(), Some("été.csv"));
    }

    #[test]
    fn test_file_name_keeps_semicolons_inside_quotes() {
        let response = HttpResponse::new(
            200,
            headers(&[(
                "content-disposition",
                r#"attachment; filename="report;v2 \"final\".zip"; size=10"#,
            )]),
            Vec::new(),
        );
        assert_eq!(
            response.file_name().as_deref(),
            Some(r#"report;v2 "final".zip"#)
        );
    }

    #[test]
    fn test_file_name_absent_or_empty() {
        let response = HttpResponse::new(200, headers(&[("content-disposition", "inline")]), Vec::new());
        assert!(response.file_name().is_none());

        let response = HttpResponse::new(
            200,
            headers(&[("content-disposition", r#"attachment; filename="""#)]),
            Vec::new(),
        );
        assert!(response.file_name().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-type", "application/octet-stream")]),
            Vec::new(),
        );
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.content_type(), Some("application/octet-stream"));
    }
}
