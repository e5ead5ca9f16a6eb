use crate::core::pagination::Query;
use crate::utils::error::TransportError;
use async_trait::async_trait;
use std::collections::BTreeMap;

const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// HTTP methods the client issues. Every API read is a GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// Status and headers of a completed exchange, handed back to callers for
/// diagnostics. Header names are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

impl ResponseMeta {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Requests left in the current rate-limit window, as reported by the API.
    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.header(RATE_LIMIT_REMAINING_HEADER)
            .and_then(|v| v.trim().parse().ok())
    }
}

/// Raw payload plus metadata delivered by a transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
}

/// Performs requests against named API resource paths.
///
/// Implementations own connection handling, authentication and timeouts.
/// A non-success HTTP status is not a transport failure: it is returned in
/// [`RawResponse::meta`] and classified by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<RawResponse, TransportError>;
}
