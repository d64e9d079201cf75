//! Pure transform from service recommendations to renderable cards.
//!
//! Nothing here touches a terminal or a file, so every formatting rule can
//! be tested directly.

use serde::Serialize;

use crate::models::Recommendation;

/// Maximum description length shown on a card, in characters
pub const DESCRIPTION_LIMIT: usize = 200;

const ELLIPSIS: &str = "...";

/// One recommendation ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// 1-based position in the server's ranking
    pub rank: usize,
    pub name: String,
    /// Relevance as a percentage string, e.g. `"87.3%"`
    pub relevance: String,
    pub description: String,
    pub duration: String,
    pub test_types: String,
    pub adaptive_support: String,
    pub remote_support: String,
    pub url: String,
}

impl Card {
    /// Builds the card for the recommendation at `index` (0-based)
    pub fn from_recommendation(index: usize, rec: &Recommendation) -> Self {
        Self {
            rank: index + 1,
            name: rec.assessment_name.clone(),
            relevance: format_relevance(rec.relevance_score),
            description: truncate(rec.description.as_deref().unwrap_or_default(), DESCRIPTION_LIMIT),
            duration: format!("{} minutes", format_number(rec.duration)),
            test_types: rec.test_type.joined(),
            adaptive_support: rec.adaptive_support.clone(),
            remote_support: rec.remote_support.clone(),
            url: rec.assessment_url.clone(),
        }
    }

    /// Card heading, e.g. `"1. Java 8 (New)"`
    pub fn heading(&self) -> String {
        format!("{}. {}", self.rank, self.name)
    }
}

/// Builds cards in server order
pub fn to_cards(recommendations: &[Recommendation]) -> Vec<Card> {
    recommendations
        .iter()
        .enumerate()
        .map(|(index, rec)| Card::from_recommendation(index, rec))
        .collect()
}

/// Formats a [0, 1] score as a percentage with one decimal place.
///
/// Ties round away from zero (`0.8725` is `87.3%`); `{:.1}` alone would
/// round them to even.
pub fn format_relevance(score: f64) -> String {
    format!("{:.1}%", (score * 1000.0).round() / 10.0)
}

/// Cuts `text` to `max_chars` characters and appends `...` if anything was cut.
///
/// Applying it twice gives the same result as applying it once: a truncated
/// string is `max_chars` characters plus the ellipsis, and cutting it again
/// drops exactly the ellipsis before adding it back.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Whole numbers print without a fractional part
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestType;

    fn recommendation(name: &str, score: f64) -> Recommendation {
        Recommendation {
            assessment_name: name.to_string(),
            description: Some("Measures knowledge of core Java.".to_string()),
            duration: 18.0,
            test_type: TestType::Many(vec![
                "Knowledge & Skills".to_string(),
                "Simulations".to_string(),
            ]),
            adaptive_support: "No".to_string(),
            remote_support: "Yes".to_string(),
            assessment_url: "https://example.com/java-8".to_string(),
            relevance_score: score,
        }
    }

    #[test]
    fn test_relevance_percentage() {
        assert_eq!(format_relevance(0.873), "87.3%");
        assert_eq!(format_relevance(1.0), "100.0%");
        assert_eq!(format_relevance(0.0), "0.0%");
        assert_eq!(format_relevance(0.12345), "12.3%");
    }

    #[test]
    fn test_relevance_ties_round_up() {
        assert_eq!(format_relevance(0.8725), "87.3%");
        assert_eq!(format_relevance(0.1225), "12.3%");
        assert_eq!(format_relevance(0.0125), "1.3%");
        assert_eq!(format_relevance(0.0025), "0.3%");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 200), "short");
        assert_eq!(truncate("", 200), "");

        let exact = "a".repeat(200);
        assert_eq!(truncate(&exact, 200), exact);
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "b".repeat(250);
        let truncated = truncate(&long, 200);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(&truncated[..200], &long[..200]);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(201);
        let truncated = truncate(&text, 200);
        assert_eq!(truncated, format!("{}...", "é".repeat(200)));
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let samples = [
            String::new(),
            "x".repeat(199),
            "x".repeat(200),
            "x".repeat(201),
            "y".repeat(1000),
            "ü".repeat(300),
            format!("{}...", "z".repeat(198)),
        ];
        for sample in samples {
            let once = truncate(&sample, DESCRIPTION_LIMIT);
            let twice = truncate(&once, DESCRIPTION_LIMIT);
            assert_eq!(once, twice, "not idempotent for length {}", sample.len());
        }
    }

    #[test]
    fn test_card_fields() {
        let card = Card::from_recommendation(0, &recommendation("Java 8 (New)", 0.873));
        assert_eq!(card.rank, 1);
        assert_eq!(card.heading(), "1. Java 8 (New)");
        assert_eq!(card.relevance, "87.3%");
        assert_eq!(card.duration, "18 minutes");
        assert_eq!(card.test_types, "Knowledge & Skills, Simulations");
        assert_eq!(card.adaptive_support, "No");
        assert_eq!(card.remote_support, "Yes");
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let mut rec = recommendation("Verify G+", 0.5);
        rec.description = None;
        assert_eq!(Card::from_recommendation(2, &rec).description, "");
    }

    #[test]
    fn test_fractional_duration() {
        let mut rec = recommendation("OPQ32r", 0.5);
        rec.duration = 22.5;
        assert_eq!(Card::from_recommendation(0, &rec).duration, "22.5 minutes");
    }

    #[test]
    fn test_cards_keep_server_order() {
        let recs = vec![
            recommendation("low", 0.2),
            recommendation("high", 0.9),
            recommendation("mid", 0.5),
        ];
        let cards = to_cards(&recs);
        let headings: Vec<String> = cards.iter().map(Card::heading).collect();
        assert_eq!(headings, vec!["1. low", "2. high", "3. mid"]);
    }
}
