//! `POST /update/<kind>/<name>/<value>` handler.
//!
//! Decode (method, path) -> store update -> outcome -> status. The request
//! body and `Content-Type` are ignored.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use runmetrics_core::error::Result;
use runmetrics_core::protocol::decode;
use runmetrics_core::UpdateOutcome;

use crate::app_state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// HTTP status for each update outcome.
pub fn status_for(outcome: UpdateOutcome) -> StatusCode {
    match outcome {
        UpdateOutcome::Ok => StatusCode::OK,
        UpdateOutcome::BadRequest => StatusCode::BAD_REQUEST,
        UpdateOutcome::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        UpdateOutcome::NotFound => StatusCode::NOT_FOUND,
    }
}

async fn apply(state: &AppState, method: &Method, path: &str) -> Result<()> {
    let route = decode(method.as_str(), path).into_result()?;
    state
        .storage()
        .update(&route.kind, &route.name, &route.value)
        .await
}

pub async fn update(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    let res = apply(&state, &method, path).await;
    let outcome = UpdateOutcome::from_result(&res);
    let status = status_for(outcome);

    match res {
        Ok(()) => {
            tracing::trace!(%method, %path, "metric updated");
            (status, [(header::CONTENT_TYPE, TEXT_PLAIN)]).into_response()
        }
        Err(e) => {
            tracing::debug!(%method, %path, outcome = outcome.as_str(), error = %e, "update rejected");
            (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], e.to_string()).into_response()
        }
    }
}
