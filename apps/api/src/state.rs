use std::sync::Arc;

use crate::config::Config;
use crate::screening::ranker::Ranker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranker. Default: TfIdfRanker. Stateless, so sharing it across
    /// requests never shares a vocabulary.
    pub ranker: Arc<dyn Ranker>,
}
