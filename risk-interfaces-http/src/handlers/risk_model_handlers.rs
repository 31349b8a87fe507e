use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::warn;

use risk_application::commands::risk_model_commands;
use risk_application::dtos::{
    CreditRiskRequest, CreditRiskResponse, LiquidityRequest, LiquidityResponse,
};
use risk_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, body_limit, parse_json};

pub async fn assess_credit_risk(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreditRiskResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request: CreditRiskRequest = parse_json(&headers, &body, body_limit(&state.config))
        .map_err(|err| {
            warn!("failed to parse credit history: {}", err);
            HttpError::BadRequest(err.to_string())
        })?;
    let response = risk_model_commands::assess_credit_risk(&state, request).await?;
    Ok(Json(response))
}

pub async fn assess_liquidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LiquidityResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request: LiquidityRequest = parse_json(&headers, &body, body_limit(&state.config))
        .map_err(|err| HttpError::BadRequest(err.to_string()))?;
    let response = risk_model_commands::assess_liquidity(request)?;
    Ok(Json(response))
}
