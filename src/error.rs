/// Input problems caught before any request is sent
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("Number of recommendations must be between 1 and 20")]
    TopKOutOfRange,
}

/// Client-level errors
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Whether the error happened locally, before the network was involved
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Message shown to the user in the error banner.
    ///
    /// Validation errors are shown as-is; everything that involved the
    /// service gets a hint about the endpoint the client was talking to.
    pub fn user_message(&self, base_url: &str) -> String {
        match self {
            ClientError::Validation(e) => e.to_string(),
            _ => format!(
                "Failed to get recommendations: {}. Make sure the API is running at {}",
                self, base_url
            ),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
