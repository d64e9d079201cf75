//! Per-submission correlation id.
//!
//! Every `POST /recommend` carries one in `x-request-id`, and the same id is
//! recorded on the submission's tracing span, so a client log line can be
//! matched to the service's own logs.

use reqwest::header::HeaderValue;
use uuid::Uuid;

use crate::models::Query;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reads an id back from its header text
    pub fn parse(text: &str) -> Option<Self> {
        Uuid::parse_str(text.trim()).ok().map(Self)
    }

    /// Value for the [`REQUEST_ID_HEADER`] header
    pub fn header_value(&self) -> HeaderValue {
        let mut buf = Uuid::encode_buffer();
        let text = self.0.hyphenated().encode_lower(&mut buf);
        // Lowercase hex and hyphens are always legal header bytes.
        HeaderValue::from_str(text).unwrap_or_else(|_| HeaderValue::from_static("unknown"))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Span covering one submission from validation to re-enable
pub fn submission_span(request_id: &RequestId, query: &Query) -> tracing::Span {
    tracing::info_span!(
        "submission",
        request_id = %request_id,
        top_k = query.top_k(),
    )
}
