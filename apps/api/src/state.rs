use std::sync::Arc;

use crate::cache::ResultCache;
use crate::config::Config;
use crate::embedding::Embedder;
use crate::jobs::JobSourceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Content-addressed parse-result cache. Disabled when Redis is unreachable.
    pub cache: ResultCache,
    pub jobs: JobSourceClient,
    /// Pluggable embedding backend. Default: HashedBagEmbedder. The concrete
    /// model can be swapped here without touching the matcher's ranking logic.
    pub embedder: Arc<dyn Embedder>,
    #[allow(dead_code)]
    pub config: Config,
}
