//! relsim-page — server-rendered status page.
//!
//! A single full-screen banner showing the running version and its
//! deployment channel, colored so stable and canary replicas are easy to
//! tell apart behind a load balancer.
//!
//! # Routes
//!
//! | Route | Handler |
//! |---|---|
//! | `/` | Status banner |
//! | any other unmatched path | Status banner |

pub mod pages;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use relsim_core::AppConfig;

/// Shared state for page handlers.
#[derive(Clone, Debug)]
pub struct PageState {
    pub config: Arc<AppConfig>,
}

/// Build the status page router.
///
/// The page is also the fallback, so once merged it answers every path
/// no other route claims.
pub fn page_router(state: PageState) -> Router {
    Router::new()
        .route("/", any(pages::status))
        .fallback(pages::status)
        .with_state(state)
}
