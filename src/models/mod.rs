pub mod query;
pub mod recommendation;

pub use query::{parse_top_k, Query, RecommendRequest, MAX_TOP_K, MIN_TOP_K};
pub use recommendation::{RecommendResponse, Recommendation, ServiceHealth, TestType};
