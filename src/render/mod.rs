pub mod capture;
pub mod html;
pub mod terminal;

use serde::Serialize;

use crate::cards::Card;

pub use capture::CaptureSurface;
pub use terminal::TerminalSurface;

/// Output format for a one-shot query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled cards on the terminal
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    count: usize,
    cards: &'a [Card],
}

/// Result list as pretty-printed JSON
pub fn render_json(query: &str, cards: &[Card]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        query,
        count: cards.len(),
        cards,
    })
}
