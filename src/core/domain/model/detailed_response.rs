use reqwest::{StatusCode, header::HeaderMap};
use std::borrow::Cow;

/// The HTTP response as it came off the wire, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// The response body exactly as received.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// The body as text. Invalid UTF-8 sequences become U+FFFD; read
    /// [`body`](Self::body) when the exact bytes matter.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// A decoded model together with the response it was decoded from.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub result: T,
    pub response: RawResponse,
}

impl<T> DetailedResponse<T> {
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.response.headers
    }

    /// Drops the raw response and keeps the model.
    pub fn into_result(self) -> T {
        self.result
    }
}
