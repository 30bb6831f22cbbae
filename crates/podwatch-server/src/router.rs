//! Axum router wiring.
//!
//! Every route accepts any method. Unmatched paths fall through to the
//! index page.

use axum::{routing::any, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", any(handlers::ping))
        .route("/active", any(handlers::active))
        .route("/", any(handlers::index))
        .fallback(handlers::index)
        .with_state(state)
}
