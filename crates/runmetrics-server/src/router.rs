//! Axum router wiring.
//!
//! Exposes a single `/update/*rest` route. It accepts every method so that a
//! method mismatch is reported as 404 by the update decoder instead of 405;
//! everything else falls through to axum's default 404.

use axum::{routing::any, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update/*rest", any(handlers::update::update))
        .with_state(state)
}
