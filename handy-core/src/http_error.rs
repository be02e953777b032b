// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! User-facing messages for failed HTTP calls.
//!
//! The messages are Vietnamese and kept verbatim for compatibility with
//! existing front ends.

use serde_json::Value;

/// Shown when the server answered without a message of its own.
pub const SERVER_ERROR_PREFIX: &str = "Lỗi máy chủ";

/// Shown when the request went out but no response came back.
pub const CONNECTION_FAILED: &str =
    "Không thể kết nối đến máy chủ. Vui lòng kiểm tra kết nối mạng của bạn.";

/// Last resort when nothing else describes the failure.
pub const UNKNOWN_ERROR: &str = "Đã có lỗi không xác định xảy ra.";

/// What a server sent back with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponseInfo {
    pub status: Option<u16>,
    /// `message` field of the response body, if the server supplied one.
    pub message: Option<String>,
}

/// Structural contract of an HTTP client error.
///
/// An error qualifies when it was produced by the HTTP client; it then may carry
/// a response (the server answered) or only a request (nothing came back).
/// Any error may carry a plain message.
pub trait HttpClientError {
    /// Whether this error was produced by the HTTP client.
    fn is_client_error(&self) -> bool;

    fn response(&self) -> Option<HttpResponseInfo>;

    /// Whether the request was sent.
    fn has_request(&self) -> bool;

    fn message(&self) -> Option<String>;
}

/// Owned description of a failed call, for clients that are not JSON-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpErrorInfo {
    pub response: Option<HttpResponseInfo>,
    pub request_sent: bool,
    pub message: Option<String>,
}

impl HttpClientError for HttpErrorInfo {
    fn is_client_error(&self) -> bool {
        true
    }

    fn response(&self) -> Option<HttpResponseInfo> {
        self.response.clone()
    }

    fn has_request(&self) -> bool {
        self.request_sent
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// JavaScript-style truthiness, as the serialized client errors expect.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|field| truthy(field))
}

/// Serialized client errors, e.g. forwarded from a browser.
impl HttpClientError for Value {
    fn is_client_error(&self) -> bool {
        is_http_client_error(self)
    }

    fn response(&self) -> Option<HttpResponseInfo> {
        let response = field(self, "response")?;

        Some(HttpResponseInfo {
            status: response
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|status| u16::try_from(status).ok()),
            message: response
                .get("data")
                .and_then(|data| data.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }

    fn has_request(&self) -> bool {
        field(self, "request").is_some()
    }

    fn message(&self) -> Option<String> {
        self.get("message").and_then(Value::as_str).map(str::to_owned)
    }
}

/// Whether `value` has the shape of a serialized HTTP client error: an object
/// carrying both a `config` and an `isAxiosError` key.
pub fn is_http_client_error(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("config") && object.contains_key("isAxiosError"))
}

/// Best-effort, user-facing message for `error`. Never fails.
///
/// In order of preference:
/// 1. the server's own non-empty message
/// 2. `"Lỗi máy chủ: {status}"` when the server answered without one
/// 3. the connectivity message when the request got no response
/// 4. the error's own non-empty message
/// 5. the generic unknown-error message
///
/// Steps 1 to 3 only apply to HTTP client errors.
///
/// ```
/// use handy_core::parse_http_error;
/// use serde_json::json;
///
/// let error = json!({
///     "config": {},
///     "isAxiosError": true,
///     "response": {"status": 404, "data": {"message": "Không tìm thấy"}},
/// });
///
/// assert_eq!(parse_http_error(&error), "Không tìm thấy");
/// ```
pub fn parse_http_error<E: HttpClientError + ?Sized>(error: &E) -> String {
    if error.is_client_error() {
        if let Some(response) = error.response() {
            return match response.message.filter(|message| !message.is_empty()) {
                Some(message) => message,
                None => match response.status {
                    Some(status) => format!("{SERVER_ERROR_PREFIX}: {status}"),
                    None => format!("{SERVER_ERROR_PREFIX}: undefined"),
                },
            };
        }

        if error.has_request() {
            return CONNECTION_FAILED.to_owned();
        }
    }

    error
        .message()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_owned())
}
