//! Relay handler
//!
//! Accepts OPTIONS and POST on any path. A POST body carries the question,
//! optional context snippets, and optional retrieval metadata; the handler
//! composes one prompt, makes exactly one completion call, and returns the
//! extracted answer. Every validation failure short-circuits to an error
//! envelope before the outbound call.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use satchel_llm::prompt::{build_prompt, is_truthy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Relay request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    /// User's question; any JSON-truthy value is accepted
    #[serde(default)]
    pub question: Option<Value>,

    /// Context snippets from the caller's CSV exports
    #[serde(default)]
    pub context: Option<String>,

    /// Retrieval metadata, embedded verbatim into the prompt with no schema
    /// enforcement
    #[serde(default)]
    pub top_matches: Option<Value>,
}

/// Relay response body
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Answer text extracted from the completion
    pub answer: String,

    /// Model name the relay is configured with
    pub model: String,
}

/// Catch-all entry point: dispatches on method so the OPTIONS/POST contract
/// holds on every path.
pub async fn ask_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    state.increment_requests();

    // Preflight: empty 200; the middleware layer adds the cross-origin
    // headers.
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    answer(&state, &body).await.map(IntoResponse::into_response)
}

async fn answer(
    state: &AppState,
    body: &[u8],
) -> Result<(StatusCode, Json<AskResponse>), AppError> {
    // Parsed from raw bytes: a malformed body is an internal fault, not an
    // extractor rejection.
    let request: AskRequest =
        serde_json::from_slice(body).map_err(|e| AppError::Internal(e.to_string()))?;

    let question = match request.question.as_ref().filter(|q| is_truthy(q)) {
        Some(question) => question,
        None => return Err(AppError::MissingQuestion),
    };

    tracing::debug!(has_context = request.context.is_some(), "relaying question");

    let prompt = build_prompt(question, request.context.as_deref(), request.top_matches.as_ref());

    let completion = state.client.complete(&prompt).await?;

    Ok((
        StatusCode::OK,
        Json(AskResponse {
            answer: completion.answer,
            model: completion.model,
        }),
    ))
}
