use serde::{Deserialize, Serialize};

/// Test type(s) of an assessment.
///
/// The service sends a list, older deployments sent a single string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestType {
    One(String),
    Many(Vec<String>),
}

impl TestType {
    /// Comma-joined display form
    pub fn joined(&self) -> String {
        match self {
            TestType::One(value) => value.clone(),
            TestType::Many(values) => values.join(", "),
        }
    }
}

impl Default for TestType {
    fn default() -> Self {
        TestType::Many(Vec::new())
    }
}

/// One assessment suggested by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub assessment_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Duration in minutes
    pub duration: f64,
    #[serde(default)]
    pub test_type: TestType,
    pub adaptive_support: String,
    pub remote_support: String,
    pub assessment_url: String,
    /// Match quality in [0, 1]
    pub relevance_score: f64,
}

/// Body of a successful `POST /recommend`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl RecommendResponse {
    /// Recommendations in server order; absent and null both read as empty
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.recommendations.unwrap_or_default()
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub architecture: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_deserialization() {
        let json = r#"{
            "assessment_name": "Java 8 (New)",
            "assessment_url": "https://www.shl.com/solutions/products/product-catalog/view/java-8-new/",
            "description": "Multi-choice test that measures the knowledge of Java class design.",
            "duration": 18,
            "test_type": ["Knowledge & Skills"],
            "adaptive_support": "Yes",
            "remote_support": "Yes",
            "relevance_score": 0.873
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.assessment_name, "Java 8 (New)");
        assert_eq!(rec.duration, 18.0);
        assert_eq!(
            rec.test_type,
            TestType::Many(vec!["Knowledge & Skills".to_string()])
        );
        assert_eq!(rec.relevance_score, 0.873);
    }

    #[test]
    fn test_single_string_test_type() {
        let test_type: TestType = serde_json::from_str(r#""Personality & Behavior""#).unwrap();
        assert_eq!(test_type.joined(), "Personality & Behavior");
    }

    #[test]
    fn test_list_test_type_joined() {
        let test_type: TestType =
            serde_json::from_str(r#"["Ability & Aptitude", "Simulations"]"#).unwrap();
        assert_eq!(test_type.joined(), "Ability & Aptitude, Simulations");
    }

    #[test]
    fn test_response_missing_or_null_recommendations() {
        let missing: RecommendResponse =
            serde_json::from_str(r#"{"query": "x", "count": 0}"#).unwrap();
        assert!(missing.into_recommendations().is_empty());

        let null: RecommendResponse =
            serde_json::from_str(r#"{"recommendations": null}"#).unwrap();
        assert!(null.into_recommendations().is_empty());
    }

    #[test]
    fn test_health_deserialization() {
        let health: ServiceHealth = serde_json::from_str(
            r#"{"status": "healthy", "service": "SHL Recommendation System", "architecture": "Modular"}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.architecture.as_deref(), Some("Modular"));
    }
}
