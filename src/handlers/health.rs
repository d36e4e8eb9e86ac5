// GET /health handler

use std::convert::Infallible;
use tracing::debug;
use warp::http::StatusCode;

use crate::llm::LlmProvider;
use crate::models::{HealthResponse, HealthStatus};
use crate::state::AppState;
use crate::supervisor::StartupPhase;

pub async fn health_handler(state: AppState) -> Result<impl warp::Reply, Infallible> {
    let (status, response) = probe(state.provider.as_ref(), state.startup_phase()).await;
    Ok(warp::reply::with_status(warp::reply::json(&response), status))
}

/// Ask the model server for its model list; any failure means "initializing".
/// Never cached.
pub async fn probe(provider: &dyn LlmProvider, startup: StartupPhase) -> (StatusCode, HealthResponse) {
    match provider.ping().await {
        Ok(()) => (
            StatusCode::OK,
            HealthResponse {
                status: HealthStatus::Ready,
                startup,
            },
        ),
        Err(err) => {
            debug!(error = %err, ?startup, "model server not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: HealthStatus::Initializing,
                    startup,
                },
            )
        }
    }
}
