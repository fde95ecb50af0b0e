//! relsim-api — HTTP surface of the relsim server.
//!
//! # Routes
//!
//! Every route answers any method.
//!
//! | Path | Description |
//! |---|---|
//! | `/version` | Version and static `healthy` status |
//! | `/health` | Liveness probe with injected failures |
//! | `/work` | Simulated work: configured delay, then injected failures |
//! | `/`, unmatched paths | HTML status page (`status-page` feature) |

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use relsim_core::{AppConfig, FaultInjector, FaultSource};

/// Shared state for API handlers. Read-only once the server starts.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub config: Arc<AppConfig>,
    pub faults: FaultInjector,
}

impl ApiState {
    /// State drawing failures from the thread-local RNG.
    pub fn new(config: AppConfig) -> Self {
        let faults = FaultInjector::with_thread_rng(config.profile.error_rate);
        Self {
            config: Arc::new(config),
            faults,
        }
    }

    /// State drawing failures from `source`.
    pub fn with_source(config: AppConfig, source: Arc<dyn FaultSource>) -> Self {
        let faults = FaultInjector::new(config.profile.error_rate, source);
        Self {
            config: Arc::new(config),
            faults,
        }
    }
}

/// Build the complete router.
pub fn build_router(state: ApiState) -> Router {
    #[cfg(feature = "status-page")]
    let page_state = relsim_page::PageState {
        config: state.config.clone(),
    };

    let router = Router::new()
        .route("/version", any(handlers::version))
        .route("/health", any(handlers::health))
        .route("/work", any(handlers::work))
        .with_state(state);

    #[cfg(feature = "status-page")]
    let router = router.merge(relsim_page::page_router(page_state));

    router
}
