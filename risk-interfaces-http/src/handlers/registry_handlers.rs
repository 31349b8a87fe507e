use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use risk_application::commands::registry_commands;
use risk_application::queries::registry_queries;
use risk_application::AppState;
use risk_domain::{RegistryEntry, RegistryKind, RegistryPayload, RegistryQuery, RegistryUpdateQuery};

use crate::error::HttpError;
use crate::middleware::authorize;

fn parse_kind(kind: &str) -> Result<RegistryKind, HttpError> {
    kind.parse().map_err(|_| HttpError::NotFound)
}

pub async fn list_registry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<String>,
    Query(query): Query<RegistryQuery>,
) -> Result<Json<Vec<RegistryEntry>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let kind = parse_kind(&kind)?;
    let results = registry_queries::list_registry(&state, kind, query).await?;
    Ok(Json(results))
}

pub async fn update_registry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<String>,
    Query(query): Query<RegistryUpdateQuery>,
    Json(payload): Json<RegistryPayload>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let kind = parse_kind(&kind)?;
    registry_commands::update_registry(&state, kind, query, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}
