use std::sync::Arc;

use crate::config::Config;
use crate::matching::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: `MatchEngine` with the configured weight profile.
    pub scorer: Arc<dyn MatchScorer>,
}
