use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::warn;

use risk_application::commands::score_commands;
use risk_application::dtos::{BatchScoreRequest, BatchScoreResponse, ScoreRequest, ScoreResponse};
use risk_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, body_limit, parse_json};

pub async fn score_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ScoreResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request: ScoreRequest = parse_json(&headers, &body, body_limit(&state.config)).map_err(|err| {
        state.metrics.record_invalid_input();
        warn!("failed to parse score body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    let response = score_commands::score_transaction(&state, request).await?;
    Ok(Json(response))
}

pub async fn score_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BatchScoreResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request: BatchScoreRequest = parse_json(&headers, &body, body_limit(&state.config)).map_err(|err| {
        warn!("failed to parse batch body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    let response = score_commands::score_batch(&state, request.transactions).await?;
    Ok(Json(response))
}
