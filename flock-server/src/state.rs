use flock_graph::GraphService;
use flock_identity::IdentityService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// The pool is kept alongside the services so health probes can reach the
/// database directly.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub identity: Arc<IdentityService>,
    pub graph: Arc<GraphService>,
}
