use std::sync::mpsc::{Receiver, Sender};

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::suggest::{SuggestEvent, SuggestRequest, SuggestState};

use super::input_state::InputState;

/// Minimum trimmed query length that triggers a suggestion request.
/// Anything shorter clears the dropdown without touching the network.
pub const MIN_QUERY_LEN: usize = 2;

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub layout_regions: LayoutRegions,
    /// Dropdown rows shown at once, from config
    pub max_visible: usize,
    pub should_quit: bool,
    /// Query accepted with Enter, printed to stdout on exit
    pub accepted: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(),
            layout_regions: LayoutRegions::default(),
            max_visible: config.ui.max_visible,
            should_quit: false,
            accepted: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.input.text()
    }

    /// Wire the worker channels into the suggestion state
    pub fn set_suggest_channels(
        &mut self,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestEvent>,
    ) {
        self.suggest.set_channels(request_tx, response_rx);
    }

    /// React to an edit of the input field.
    ///
    /// Trims the input; short queries clear the dropdown without a network
    /// call, anything else goes to the worker.
    pub fn on_query_edited(&mut self) {
        let trimmed = self.query().trim().to_string();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.suggest.cancel_in_flight();
            self.suggest.dismiss();
            return;
        }
        self.suggest.send_query(&trimmed);
    }

    /// Copy a suggestion into the input and close the dropdown.
    ///
    /// Does not issue a new request: like a programmatic fill, picking a
    /// suggestion does not count as typing.
    pub fn accept_suggestion(&mut self, text: &str) {
        self.input.set_text(text);
        self.suggest.dismiss();
    }

    /// Accept the highlighted dropdown row, if any
    pub fn accept_selected(&mut self) -> bool {
        if let Some(text) = self.suggest.selected() {
            let text = text.to_string();
            self.accept_suggestion(&text);
            return true;
        }
        false
    }

    /// Drain pending worker events and fold them into the dropdown state
    pub fn poll_suggest_events(&mut self) {
        self.suggest.poll_events();
    }
}
