//! Page regions and the surfaces that display them.
//!
//! [`Page`] owns the state of the four regions the query flow drives (loading
//! indicator, result list, error banner, submit control) and forwards every
//! change to a [`Surface`]. Rendering targets only ever see the transitions;
//! they never write to the state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cards::Card;

/// How long an error banner stays visible
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);

/// Snapshot of every page region
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub loading: bool,
    pub results_visible: bool,
    pub cards: Vec<Card>,
    /// Text of the error banner while it is visible
    pub error: Option<String>,
    pub submit_enabled: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            loading: false,
            results_visible: false,
            cards: Vec::new(),
            error: None,
            submit_enabled: true,
        }
    }
}

/// A rendering target for page transitions
pub trait Surface: Send + Sync {
    fn loading_started(&self) {}

    fn loading_finished(&self) {}

    /// The result list was replaced; the surface should bring it into view
    fn results(&self, cards: &[Card]);

    fn error_shown(&self, message: &str);

    fn error_hidden(&self) {}
}

/// Shared page state
#[derive(Clone)]
pub struct Page {
    state: Arc<RwLock<PageState>>,
    surface: Arc<dyn Surface>,
}

impl Page {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            state: Arc::new(RwLock::new(PageState::default())),
            surface,
        }
    }

    pub async fn snapshot(&self) -> PageState {
        self.state.read().await.clone()
    }

    /// Hides results and errors, shows the loading indicator, disables submit.
    ///
    /// Returns `false` and changes nothing if submit is already disabled.
    pub async fn try_begin_loading(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if !state.submit_enabled {
                return false;
            }
            state.loading = true;
            state.results_visible = false;
            state.error = None;
            state.submit_enabled = false;
        }
        self.surface.loading_started();
        true
    }

    /// Hides the loading indicator and re-enables submit
    pub async fn end_loading(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = false;
            state.submit_enabled = true;
        }
        self.surface.loading_finished();
    }

    /// Replaces the result list and makes it visible
    pub async fn render(&self, cards: Vec<Card>) {
        {
            let mut state = self.state.write().await;
            state.cards = cards.clone();
            state.results_visible = true;
        }
        self.surface.results(&cards);
    }

    /// Shows `message` in the error banner and schedules its hide.
    ///
    /// Every call gets its own timer and none are cancelled, so an earlier
    /// timer can hide a message shown after it.
    pub async fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        {
            let mut state = self.state.write().await;
            state.error = Some(message.clone());
        }
        self.surface.error_shown(&message);

        let state = Arc::clone(&self.state);
        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            tokio::time::sleep(ERROR_DISPLAY).await;
            state.write().await.error = None;
            surface.error_hidden();
        });
    }
}
