// POST /chat handler

use std::convert::Infallible;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;
use warp::http::StatusCode;

use crate::llm::{shape_response, GenerateRequest, LlmProvider};
use crate::models::{ChatReply, ChatRequest};
use crate::state::AppState;

pub const EMPTY_MESSAGE_ERROR: &str = "No message provided";
pub const UPSTREAM_STATUS_ERROR: &str = "Failed to get response from Ollama";

pub async fn chat_handler(
    state: AppState,
    request: ChatRequest,
) -> Result<impl warp::Reply, Infallible> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let (status, reply) = relay_chat(state.provider.as_ref(), request)
        .instrument(span)
        .await;

    Ok(warp::reply::with_status(warp::reply::json(&reply), status))
}

/// Validate the message, forward it to the model server and shape the reply
pub async fn relay_chat(provider: &dyn LlmProvider, request: ChatRequest) -> (StatusCode, ChatReply) {
    if request.message.is_empty() {
        debug!("rejecting empty message");
        return (StatusCode::BAD_REQUEST, ChatReply::error(EMPTY_MESSAGE_ERROR));
    }

    debug!(chars = request.message.len(), "POST /chat");

    match provider.generate(GenerateRequest::chat(request.message)).await {
        Ok(result) => (StatusCode::OK, ChatReply::response(shape_response(&result.text))),
        Err(err) if err.is_upstream_status() => {
            warn!(error = %err, "model server returned an error status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatReply::error(UPSTREAM_STATUS_ERROR),
            )
        }
        Err(err) => {
            warn!(error = %err, "could not reach model server");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatReply::error(format!("Error communicating with Ollama: {}", err)),
            )
        }
    }
}
