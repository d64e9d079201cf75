//! Recommendation service abstraction
//!
//! The query flow only talks to the service through [`RecommendationApi`], so
//! the endpoint is injected at construction and tests can swap in a double.

use crate::{
    error::ClientResult,
    models::{Query, RecommendResponse, ServiceHealth},
    request_id::RequestId,
};

pub mod http;

pub use http::HttpRecommendationApi;

/// Trait for recommendation service clients
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Request up to `query.top_k()` recommendations for the query text.
    ///
    /// One attempt, no retry. Non-2xx statuses, transport failures and
    /// bodies that are not valid JSON are all errors.
    async fn recommend(
        &self,
        query: &Query,
        request_id: RequestId,
    ) -> ClientResult<RecommendResponse>;

    /// Fetch the service health document
    async fn health(&self) -> ClientResult<ServiceHealth>;

    /// Base URL the client is pointed at, for user-facing hints
    fn base_url(&self) -> String;
}
