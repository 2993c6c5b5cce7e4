pub mod config;
pub mod error;
pub mod handlers;
pub mod pdf;
pub mod services;
pub mod startup;

use services::upstream::UpstreamClient;

/// Shared application state.
///
/// The upstream client carries the process-wide credential pair; there is no
/// other shared state, so every request is handled independently.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}
