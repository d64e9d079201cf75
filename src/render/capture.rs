use std::sync::Mutex;

use crate::cards::Card;
use crate::page::Surface;

/// Surface that keeps what it was shown instead of drawing it.
///
/// Used for the JSON and HTML output formats, where the cards are written
/// out once the submission has finished.
#[derive(Debug, Default)]
pub struct CaptureSurface {
    inner: Mutex<Captured>,
}

#[derive(Debug, Default)]
struct Captured {
    cards: Vec<Card>,
    renders: usize,
    errors: Vec<String>,
}

impl CaptureSurface {
    /// Cards from the most recent render
    pub fn cards(&self) -> Vec<Card> {
        self.lock().cards.clone()
    }

    /// Number of times the result list was rendered
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    /// Every error message shown, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.lock().errors.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().errors.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Captured> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Surface for CaptureSurface {
    fn results(&self, cards: &[Card]) {
        let mut inner = self.lock();
        inner.cards = cards.to_vec();
        inner.renders += 1;
    }

    fn error_shown(&self, message: &str) {
        self.lock().errors.push(message.to_string());
    }
}
