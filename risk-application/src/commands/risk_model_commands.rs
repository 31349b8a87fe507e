use tracing::{info, warn};

use crate::dtos::{
    CreditRiskRequest, CreditRiskResponse, LiquidityRequest, LiquidityResponse, ScoreRequest,
};
use crate::{AppError, AppState};
use risk_domain::{liquidity_coverage, DomainError, Transaction};

/// Scores a customer's history for spending spikes and large-transaction share.
/// Any malformed history entry rejects the whole request.
pub async fn assess_credit_risk(
    state: &AppState,
    request: CreditRiskRequest,
) -> Result<CreditRiskResponse, AppError> {
    let history = match parse_history(request.history) {
        Ok(history) => history,
        Err(err) => {
            state.metrics.record_invalid_input();
            warn!("rejected credit history: {}", err);
            return Err(err.into());
        }
    };

    let assessment = risk_domain::assess_credit_risk(&history);
    info!(
        "credit risk for {}: {} over {} transactions",
        request.customer_id.as_deref().unwrap_or("unknown customer"),
        assessment.score,
        history.len()
    );
    Ok(CreditRiskResponse {
        customer_id: request.customer_id,
        transactions: history.len(),
        assessment,
    })
}

fn parse_history(items: Vec<serde_json::Value>) -> Result<Vec<Transaction>, DomainError> {
    items
        .into_iter()
        .map(|item| {
            let request = ScoreRequest::from_value(item)?;
            Transaction::try_from(request.transaction)
        })
        .collect()
}

pub fn assess_liquidity(request: LiquidityRequest) -> Result<LiquidityResponse, AppError> {
    let metrics = liquidity_coverage(request.liquid_assets, request.net_cash_outflows)?;
    info!(
        "liquidity coverage {} ({})",
        metrics.liquidity_coverage_ratio, metrics.status
    );
    Ok(metrics)
}
