//! The query flow: validate, call the service once, update the page.

use std::sync::Arc;

use tracing::Instrument;

use crate::{
    api::RecommendationApi,
    cards::to_cards,
    error::{ClientResult, ValidationError},
    models::{Query, ServiceHealth},
    page::Page,
    request_id::{submission_span, RequestId},
};

/// Banner text for a successful response without results
pub const NO_RECOMMENDATIONS: &str = "No recommendations found";

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// This many cards were rendered
    Rendered(usize),
    /// The service answered with no recommendations
    Empty,
    /// Input was rejected locally; nothing was sent
    Invalid(ValidationError),
    /// The request failed or the response could not be read
    Failed,
    /// A submission was already in flight; nothing was sent
    Ignored,
}

/// Submits queries to the recommendation service and drives the page.
///
/// Every failure is reported on the page; nothing escapes [`submit_query`].
///
/// [`submit_query`]: QueryClient::submit_query
pub struct QueryClient {
    api: Arc<dyn RecommendationApi>,
    page: Page,
}

impl QueryClient {
    pub fn new(api: Arc<dyn RecommendationApi>, page: Page) -> Self {
        Self { api, page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> String {
        self.api.base_url()
    }

    /// Validates the input, sends one request and renders the outcome.
    ///
    /// The page is in the loading state for exactly the duration of the
    /// request. While it is, further submissions are ignored.
    pub async fn submit_query(&self, text: &str, top_k: i64) -> SubmitOutcome {
        let query = match Query::new(text, top_k) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!(error = %e, "Query rejected");
                self.page.show_error(e.to_string()).await;
                return SubmitOutcome::Invalid(e);
            }
        };

        if !self.page.try_begin_loading().await {
            tracing::debug!("Submission ignored while a request is in flight");
            return SubmitOutcome::Ignored;
        }

        let request_id = RequestId::new();
        let span = submission_span(&request_id, &query);
        let outcome = self.fetch_and_render(&query, request_id).instrument(span).await;

        self.page.end_loading().await;
        outcome
    }

    async fn fetch_and_render(&self, query: &Query, request_id: RequestId) -> SubmitOutcome {
        match self.api.recommend(query, request_id).await {
            Ok(response) => {
                let recommendations = response.into_recommendations();
                if recommendations.is_empty() {
                    tracing::info!("Service returned no recommendations");
                    self.page.show_error(NO_RECOMMENDATIONS).await;
                    return SubmitOutcome::Empty;
                }

                let cards = to_cards(&recommendations);
                let count = cards.len();
                self.page.render(cards).await;
                SubmitOutcome::Rendered(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendation request failed");
                self.page.show_error(e.user_message(&self.base_url())).await;
                SubmitOutcome::Failed
            }
        }
    }

    /// Fetches the service health document
    pub async fn check_health(&self) -> ClientResult<ServiceHealth> {
        self.api.health().await
    }
}
