//! HTTP client for the assessment recommendation service
//!
//! Endpoints:
//! 1. `POST /recommend` with `{ "query", "top_k" }` → ranked recommendations
//! 2. `GET /health` → service status

use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::RecommendationApi,
    config::Config,
    error::{ClientError, ClientResult},
    models::{Query, RecommendResponse, ServiceHealth},
    request_id::{RequestId, REQUEST_ID_HEADER},
};

#[derive(Clone)]
pub struct HttpRecommendationApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationApi {
    /// Creates a client with the transport's default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from configuration, applying the optional timeout
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks the status and decodes the JSON body
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Recommendation service returned an error");
            return Err(ClientError::Api(status_text(status)));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation service response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize recommendation service response"
            );
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

/// Reason phrase for a status, falling back to the numeric code
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait::async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn recommend(
        &self,
        query: &Query,
        request_id: RequestId,
    ) -> ClientResult<RecommendResponse> {
        let response = self
            .http_client
            .post(self.url("/recommend"))
            .header(REQUEST_ID_HEADER, request_id.header_value())
            .json(&query.to_request())
            .send()
            .await?;

        let body: RecommendResponse = Self::decode(response).await?;

        tracing::info!(
            query = %query.text(),
            top_k = query.top_k(),
            results = body.recommendations.as_ref().map_or(0, Vec::len),
            "Recommendations received"
        );

        Ok(body)
    }

    async fn health(&self) -> ClientResult<ServiceHealth> {
        let response = self.http_client.get(self.url("/health")).send().await?;
        Self::decode(response).await
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = HttpRecommendationApi::new("http://test.local/");
        assert_eq!(api.url("/recommend"), "http://test.local/recommend");
        assert_eq!(api.base_url(), "http://test.local");
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = Config::default().with_api_base_url("http://localhost:8000");
        let api = HttpRecommendationApi::from_config(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "599");
    }
}
