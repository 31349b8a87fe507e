use rayon::prelude::*;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dtos::{BatchItemResult, BatchScoreResponse, ScoreRequest, ScoreResponse};
use crate::{AppError, AppState};
use risk_domain::{route, AnomalyScore, DomainError, Registries, RiskScorer, Transaction};

/// Validates, scores and routes one request against a registry snapshot.
pub fn score_with(
    scorer: &RiskScorer,
    registries: &Registries,
    request: ScoreRequest,
) -> Result<ScoreResponse, DomainError> {
    let transaction = Transaction::try_from(request.transaction)?;
    let anomaly = match &request.anomaly_score {
        Some(value) => AnomalyScore::from_json(value)?,
        None => None,
    };
    let assessment = scorer.score(
        &transaction,
        &registries.merchants,
        &registries.locations,
        anomaly,
    );
    let routing = route(&transaction, &assessment);
    Ok(ScoreResponse {
        assessment,
        routing,
    })
}

/// Scores every item in parallel. Output order matches input order and a
/// rejected item never affects its neighbours.
pub fn score_all(
    scorer: &RiskScorer,
    registries: &Registries,
    items: Vec<Value>,
) -> Vec<BatchItemResult> {
    items
        .into_par_iter()
        .enumerate()
        .map(|(index, item)| {
            let transaction_id = item
                .get("transaction_id")
                .and_then(Value::as_str)
                .map(ToString::to_string);
            let scored = ScoreRequest::from_value(item)
                .and_then(|request| score_with(scorer, registries, request));
            match scored {
                Ok(response) => BatchItemResult {
                    index,
                    transaction_id,
                    result: Some(response),
                    error: None,
                },
                Err(err) => BatchItemResult {
                    index,
                    transaction_id,
                    result: None,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect()
}

pub async fn score_transaction(
    state: &AppState,
    request: ScoreRequest,
) -> Result<ScoreResponse, AppError> {
    let registries = state.registries_snapshot().await;
    match score_with(&state.scorer, &registries, request) {
        Ok(response) => {
            let assessment = &response.assessment;
            state.metrics.record_assessment(assessment.risk_level);
            info!(
                "transaction {}: risk level {}, score {}, routed {}",
                assessment.transaction_id,
                assessment.risk_level,
                assessment.score,
                response.routing.status
            );
            Ok(response)
        }
        Err(err) => {
            state.metrics.record_invalid_input();
            warn!("rejected transaction: {}", err);
            Err(err.into())
        }
    }
}

pub async fn score_batch(
    state: &AppState,
    requests: Vec<Value>,
) -> Result<BatchScoreResponse, AppError> {
    let max = state.config.max_batch_size;
    if requests.len() > max {
        return Err(AppError::BadRequest(format!(
            "batch of {} transactions exceeds the limit of {}",
            requests.len(),
            max
        )));
    }

    let batch_id = Uuid::new_v4();
    let registries = state.registries_snapshot().await;
    let scorer = state.scorer;
    let results = tokio::task::spawn_blocking(move || score_all(&scorer, &registries, requests))
        .await
        .map_err(|err| AppError::Internal(err.into()))?;

    let mut scored = 0;
    let mut rejected = 0;
    for item in &results {
        match &item.result {
            Some(response) => {
                scored += 1;
                state.metrics.record_assessment(response.assessment.risk_level);
            }
            None => {
                rejected += 1;
                state.metrics.record_invalid_input();
            }
        }
    }
    state.metrics.record_batch();
    if rejected > 0 {
        warn!("batch {}: rejected {} of {} transactions", batch_id, rejected, results.len());
    }
    info!("batch {}: scored {} transactions", batch_id, scored);

    Ok(BatchScoreResponse {
        batch_id,
        scored,
        rejected,
        results,
    })
}
