//! Suggestion dropdown state.
//!
//! The dropdown is modeled as an explicit tagged phase driving a pure render
//! function, rather than being derived from whatever happens to be on screen.

use std::sync::mpsc::{Receiver, Sender};

use super::worker::{SuggestEvent, SuggestRequest};

/// Fixed placeholder row shown when the server has nothing to offer
pub const NO_RESULTS_TEXT: &str = "No results found";

/// What the dropdown is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestPhase {
    /// Nothing requested, or the dropdown was dismissed
    Idle,
    /// A request is in flight and nothing was displayed before it
    Loading,
    /// Suggestions returned by the server, in response order
    Results(Vec<String>),
    /// The server answered without usable suggestions
    Empty,
    /// The request failed and nothing was displayed before it
    Error,
}

/// Suggestion dropdown state
pub struct SuggestState {
    /// Current dropdown phase
    pub phase: SuggestPhase,
    /// Index of the highlighted row (only meaningful for `Results`)
    selected: usize,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<SuggestRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<SuggestEvent>>,
    /// Current request ID, incremented for each new request.
    /// Used to filter stale responses from previous requests.
    request_id: u64,
    /// ID of the currently in-flight request, if any
    in_flight_request_id: Option<u64>,
}

impl SuggestState {
    /// Create a new SuggestState with no channels wired
    pub fn new() -> Self {
        Self {
            phase: SuggestPhase::Idle,
            selected: 0,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestEvent>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Whether the dropdown currently has rows to show
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            SuggestPhase::Results(_) | SuggestPhase::Empty
        )
    }

    /// Index of the highlighted row
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Text of the highlighted row, if the dropdown is showing results
    pub fn selected(&self) -> Option<&str> {
        match &self.phase {
            SuggestPhase::Results(items) => items.get(self.selected).map(String::as_str),
            _ => None,
        }
    }

    /// Move the highlight down, wrapping at the end
    pub fn select_next(&mut self) {
        if let SuggestPhase::Results(items) = &self.phase
            && !items.is_empty()
        {
            self.selected = (self.selected + 1) % items.len();
        }
    }

    /// Move the highlight up, wrapping at the start
    pub fn select_previous(&mut self) {
        if let SuggestPhase::Results(items) = &self.phase
            && !items.is_empty()
        {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(items.len() - 1);
        }
    }

    /// Close the dropdown
    pub fn dismiss(&mut self) {
        self.phase = SuggestPhase::Idle;
        self.selected = 0;
    }

    /// Issue a suggestion request for the given query.
    ///
    /// Stamps a fresh request id so stale responses can be filtered. Entries
    /// already on screen stay up until the response lands.
    pub fn send_query(&mut self, search: &str) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        if !self.is_visible() {
            self.phase = SuggestPhase::Loading;
        }

        tx.send(SuggestRequest::Query {
            search: search.to_string(),
            request_id: self.request_id,
        })
        .is_ok()
    }

    /// Retire the in-flight request, if any.
    ///
    /// Returns true if a cancel was sent, false otherwise.
    pub fn cancel_in_flight(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(tx) = &self.request_tx
            && tx.send(SuggestRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {request_id}");
            self.in_flight_request_id = None;
            return true;
        }
        false
    }

    /// Get the current request ID
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Check if there's an in-flight request
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Drain pending worker events and fold them into the dropdown phase
    pub fn poll_events(&mut self) {
        let events: Vec<SuggestEvent> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.apply_event(event);
        }
    }

    /// Apply one worker event.
    ///
    /// Events carrying anything but the most recently issued request id are
    /// stale and dropped: a slow response to an old query must not overwrite
    /// the dropdown for a newer one.
    pub fn apply_event(&mut self, event: SuggestEvent) {
        match event {
            SuggestEvent::Loaded {
                response,
                request_id,
            } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("Dropping stale response for request {request_id}");
                    return;
                }
                self.in_flight_request_id = None;
                self.selected = 0;
                self.phase = if response.has_results() {
                    SuggestPhase::Results(response.suggestions)
                } else {
                    SuggestPhase::Empty
                };
            }
            SuggestEvent::Failed { error, request_id } => {
                if self.in_flight_request_id != Some(request_id) {
                    return;
                }
                self.in_flight_request_id = None;
                // Failures are only logged; whatever the dropdown was showing
                // before the request stays up.
                log::error!("Suggestion request {request_id} failed: {error}");
                if self.phase == SuggestPhase::Loading {
                    self.phase = SuggestPhase::Error;
                }
            }
            SuggestEvent::Cancelled { request_id } => {
                if self.in_flight_request_id == Some(request_id) {
                    self.in_flight_request_id = None;
                }
            }
        }
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}
