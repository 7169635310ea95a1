//! Suggestion worker thread
//!
//! Handles suggestion requests in a background thread so typing never blocks
//! on the network. Receives requests via channel, POSTs them to the
//! suggestion endpoint, and sends responses back to the UI thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::client::SuggestClient;
use super::protocol::SuggestResponse;

/// Request messages sent to the suggestion worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    /// Fetch suggestions for the given query
    Query {
        search: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Retire the request with the given ID without fetching
    Cancel {
        /// ID of the request to retire
        request_id: u64,
    },
}

/// Response messages received from the suggestion worker thread
#[derive(Debug)]
pub enum SuggestEvent {
    /// The endpoint answered
    Loaded {
        response: SuggestResponse,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// The request failed in transport or decoding
    Failed {
        error: String,
        /// Request ID this failure belongs to
        request_id: u64,
    },
    /// The request was retired without a fetch
    Cancelled {
        /// Request ID that was retired
        request_id: u64,
    },
}

/// Spawn the suggestion worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. POSTs the query to the suggestion endpoint
/// 3. Sends the decoded response back via the response channel
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestEvent>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: SuggestClient,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start suggestion runtime: {e}");
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        // Collapse queued messages so a burst of keystrokes fetches once
        let request = drain_to_newest(request, &request_rx, &response_tx);

        match request {
            SuggestRequest::Query { search, request_id } => {
                let event = match runtime.block_on(client.fetch(&search)) {
                    Ok(response) => SuggestEvent::Loaded {
                        response,
                        request_id,
                    },
                    Err(e) => SuggestEvent::Failed {
                        error: e.to_string(),
                        request_id,
                    },
                };
                if response_tx.send(event).is_err() {
                    // Main thread disconnected, stop working
                    return;
                }
            }
            SuggestRequest::Cancel { request_id } => {
                let _ = response_tx.send(SuggestEvent::Cancelled { request_id });
                log::debug!("Retired request {request_id} before fetch");
            }
        }
    }

    log::debug!("Suggestion worker thread shutting down");
}

/// Collapse any queued requests, keeping only the newest.
///
/// Superseded queries are acknowledged as cancelled so the UI can account
/// for every request id it issued.
fn drain_to_newest(
    first: SuggestRequest,
    request_rx: &Receiver<SuggestRequest>,
    response_tx: &Sender<SuggestEvent>,
) -> SuggestRequest {
    let mut newest = first;
    loop {
        match request_rx.try_recv() {
            Ok(next) => {
                if let SuggestRequest::Query { request_id, .. } = &newest {
                    let _ = response_tx.send(SuggestEvent::Cancelled {
                        request_id: *request_id,
                    });
                }
                newest = next;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return newest,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
