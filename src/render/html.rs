//! Static HTML export of a result list.
//!
//! Produces the result-card markup for a web page, with all service text
//! escaped and outbound links opened in a new context without leaking the
//! opener or the referrer.

use crate::cards::Card;

/// Escapes text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for a single card
pub fn render_card(card: &Card) -> String {
    format!(
        r#"<div class="result-card">
    <h3>{heading}</h3>
    <span class="result-score">Relevance: {relevance}</span>
    <p>{description}</p>
    <div class="result-meta">
        <span>⏱️ {duration}</span>
        <span>📝 {test_types}</span>
        <span>🔄 Adaptive: {adaptive}</span>
        <span>🌐 Remote: {remote}</span>
    </div>
    <p><a href="{url}" target="_blank" rel="noopener noreferrer">View Assessment →</a></p>
</div>
"#,
        heading = escape(&card.heading()),
        relevance = escape(&card.relevance),
        description = escape(&card.description),
        duration = escape(&card.duration),
        test_types = escape(&card.test_types),
        adaptive = escape(&card.adaptive_support),
        remote = escape(&card.remote_support),
        url = escape(&card.url),
    )
}

/// Full document for `query` and its cards
pub fn render_document(query: &str, cards: &[Card]) -> String {
    let mut body = String::new();
    for card in cards {
        body.push_str(&render_card(card));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="referrer" content="no-referrer">
<title>Assessment recommendations</title>
</head>
<body>
<section id="results">
<h2>Recommendations for “{query}”</h2>
<div id="resultsList">
{body}</div>
</section>
</body>
</html>
"#,
        query = escape(query),
        body = body,
    )
}
