use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use console::{style, Emoji, Term};

use crate::cards::Card;
use crate::page::Surface;

/// Hourglass for the loading indicator
pub const HOURGLASS: Emoji = Emoji("⏳ ", "");
/// Crossmark for the error banner
pub const CROSSMARK: Emoji = Emoji("❌ ", "[!] ");
/// Stopwatch for card duration
pub const STOPWATCH: Emoji = Emoji("⏱️ ", "");
/// Memo for card test types
pub const MEMO: Emoji = Emoji("📝 ", "");
/// Arrows for adaptive support
pub const ARROWS: Emoji = Emoji("🔄 ", "");
/// Globe for remote support
pub const GLOBE: Emoji = Emoji("🌐 ", "");

/// Formats one card as terminal text.
///
/// `link` controls whether the URL is emitted as an OSC 8 hyperlink; the
/// plain URL is always printed so it can be copied.
pub fn format_card(card: &Card, link: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        style(card.heading()).bold().cyan(),
        style(format!("Relevance: {}", card.relevance)).green()
    );
    if !card.description.is_empty() {
        let _ = writeln!(out, "   {}", card.description);
    }
    let _ = writeln!(
        out,
        "   {}{}  {}{}  {}Adaptive: {}  {}Remote: {}",
        STOPWATCH,
        card.duration,
        MEMO,
        card.test_types,
        ARROWS,
        card.adaptive_support,
        GLOBE,
        card.remote_support
    );
    let target = if link {
        // OSC 8: terminals that support it open the URL externally with no referrer.
        format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", card.url, card.url)
    } else {
        card.url.clone()
    };
    let _ = writeln!(out, "   View Assessment → {}", style(target).underlined());
    out
}

/// Draws page transitions on a terminal.
///
/// Results go to stdout; the loading indicator and the error banner go to
/// stderr so piped output only carries cards.
pub struct TerminalSurface {
    out: Term,
    err: Term,
    hyperlinks: bool,
    /// Whether the loading line is currently drawn
    loading_drawn: Mutex<bool>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        let out = Term::stdout();
        let hyperlinks = out.is_term();
        Self {
            out,
            err: Term::stderr(),
            hyperlinks,
            loading_drawn: Mutex::new(false),
        }
    }

    fn write_out(&self, text: &str) {
        let mut out = &self.out;
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write results to terminal");
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn loading_started(&self) {
        if !self.err.is_term() {
            return;
        }
        let line = format!("{}{}", HOURGLASS, style("Getting recommendations...").dim());
        if self.err.write_line(&line).is_ok() {
            *self.loading_drawn.lock().unwrap_or_else(|e| e.into_inner()) = true;
        }
    }

    fn loading_finished(&self) {
        let mut drawn = self.loading_drawn.lock().unwrap_or_else(|e| e.into_inner());
        if *drawn {
            let _ = self.err.clear_last_lines(1);
            *drawn = false;
        }
    }

    fn results(&self, cards: &[Card]) {
        // The loading line must go before the cards are printed below it.
        self.loading_finished();
        let mut text = String::new();
        for card in cards {
            text.push_str(&format_card(card, self.hyperlinks));
            text.push('\n');
        }
        self.write_out(&text);
    }

    fn error_shown(&self, message: &str) {
        // Clear the loading line first so the banner is not wiped with it.
        self.loading_finished();
        let line = format!("{}{}", CROSSMARK, style(message).red());
        if let Err(e) = self.err.write_line(&line) {
            tracing::warn!(error = %e, "Failed to write error banner");
        }
    }

    /// A printed banner stays in the scrollback; by the time it expires the
    /// prompt has usually been redrawn under it, so clearing lines here
    /// would wipe the user's input instead.
    fn error_hidden(&self) {
        tracing::debug!("Error banner expired");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            rank: 3,
            name: "Verify G+".to_string(),
            relevance: "64.0%".to_string(),
            description: "General ability test".to_string(),
            duration: "36 minutes".to_string(),
            test_types: "Ability & Aptitude".to_string(),
            adaptive_support: "Yes".to_string(),
            remote_support: "Yes".to_string(),
            url: "https://example.com/verify".to_string(),
        }
    }

    #[test]
    fn test_card_text_contains_all_fields() {
        let text = console::strip_ansi_codes(&format_card(&card(), false)).to_string();
        assert!(text.contains("3. Verify G+"));
        assert!(text.contains("Relevance: 64.0%"));
        assert!(text.contains("General ability test"));
        assert!(text.contains("36 minutes"));
        assert!(text.contains("Ability & Aptitude"));
        assert!(text.contains("Adaptive: Yes"));
        assert!(text.contains("Remote: Yes"));
        assert!(text.contains("https://example.com/verify"));
    }

    fn drawn(surface: &TerminalSurface) -> bool {
        *surface.loading_drawn.lock().unwrap()
    }

    #[test]
    fn test_results_clear_loading_line_first() {
        let surface = TerminalSurface::new();
        *surface.loading_drawn.lock().unwrap() = true;

        surface.results(&[]);
        assert!(!drawn(&surface));

        // Already cleared, so the page's end-of-loading call is a no-op.
        surface.loading_finished();
        assert!(!drawn(&surface));
    }

    #[test]
    fn test_error_banner_clears_loading_line_first() {
        let surface = TerminalSurface::new();
        *surface.loading_drawn.lock().unwrap() = true;

        surface.error_shown("boom");
        assert!(!drawn(&surface));
    }

    #[test]
    fn test_hyperlink_escape() {
        let text = format_card(&card(), true);
        assert!(text.contains("\x1b]8;;https://example.com/verify\x1b\\"));
    }
}
