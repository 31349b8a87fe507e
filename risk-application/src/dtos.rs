use risk_domain::{
    CreditRiskAssessment, DomainError, LiquidityMetrics, RawTransaction, RiskAssessment, Routing,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(flatten)]
    pub transaction: RawTransaction,
    #[serde(default)]
    pub anomaly_score: Option<Value>,
}

impl ScoreRequest {
    /// Reads one batch item. Only a non-object item fails here; mistyped
    /// fields are reported later, by name, during validation.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::invalid(
                "transaction",
                "must be a JSON object",
            ));
        }
        serde_json::from_value(value)
            .map_err(|err| DomainError::invalid("transaction", err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub assessment: RiskAssessment,
    pub routing: Routing,
}

/// Items stay raw JSON so that one malformed item cannot reject its neighbours.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchScoreRequest {
    #[serde(default)]
    pub transactions: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItemResult {
    pub index: usize,
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchScoreResponse {
    pub batch_id: Uuid,
    pub scored: usize,
    pub rejected: usize,
    pub results: Vec<BatchItemResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditRiskRequest {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub history: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreditRiskResponse {
    pub customer_id: Option<String>,
    pub transactions: usize,
    pub assessment: CreditRiskAssessment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiquidityRequest {
    pub liquid_assets: Decimal,
    pub net_cash_outflows: Decimal,
}

pub type LiquidityResponse = LiquidityMetrics;
