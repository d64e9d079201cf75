use serde::Serialize;

use crate::error::ValidationError;

/// Smallest number of recommendations the service accepts
pub const MIN_TOP_K: i64 = 1;
/// Largest number of recommendations the service accepts
pub const MAX_TOP_K: i64 = 20;

/// A validated query, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    top_k: u8,
}

impl Query {
    /// Validates raw form input.
    ///
    /// The text is trimmed; an empty result is rejected before `top_k` is
    /// looked at, so an empty form reports the missing query first.
    pub fn new(text: &str, top_k: i64) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        if !(MIN_TOP_K..=MAX_TOP_K).contains(&top_k) {
            return Err(ValidationError::TopKOutOfRange);
        }

        Ok(Self {
            text: text.to_string(),
            top_k: top_k as u8,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn top_k(&self) -> u8 {
        self.top_k
    }

    /// Wire body for `POST /recommend`
    pub fn to_request(&self) -> RecommendRequest<'_> {
        RecommendRequest {
            query: &self.text,
            top_k: self.top_k,
        }
    }
}

/// Parses the contents of the numeric top-k field.
///
/// Anything that is not an integer is reported the same way as an
/// out-of-range value.
pub fn parse_top_k(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::TopKOutOfRange)
}

/// Request body sent to the recommendation service
#[derive(Debug, Serialize, PartialEq)]
pub struct RecommendRequest<'a> {
    pub query: &'a str,
    pub top_k: u8,
}
