mod client;
mod protocol;
mod render;
mod state;
mod worker;

pub use client::{SuggestClient, SuggestError};
pub use protocol::{STATUS_OK, SuggestQuery, SuggestResponse};
pub use render::render_dropdown;
pub use state::{NO_RESULTS_TEXT, SuggestPhase, SuggestState};
pub use worker::{SuggestEvent, SuggestRequest, spawn_worker};
