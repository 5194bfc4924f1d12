use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::scrape::ContentFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both external services sit behind traits so tests can stub them and the
/// pipeline stays provider-agnostic.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub fetcher: Arc<dyn ContentFetcher>,
}
