use std::sync::Arc;

use crate::config::Config;
use crate::storage::ObjectStore;
use crate::store::RecruitingStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Relational backend. Postgres in production, an in-memory fake in tests.
    pub store: Arc<dyn RecruitingStore>,
    /// Bucket for raw résumé files.
    pub objects: Arc<dyn ObjectStore>,
    pub config: Config,
}
