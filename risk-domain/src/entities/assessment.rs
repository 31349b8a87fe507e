// Risk assessment entity
// Result of scoring one transaction, with the per-factor breakdown kept for audit

use serde::{Deserialize, Serialize};

use crate::value_objects::{RiskLevel, Score, TransactionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Amount,
    Merchant,
    Location,
    Behavioral,
    Anomaly,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Amount => "amount",
            Factor::Merchant => "merchant",
            Factor::Location => "location",
            Factor::Behavioral => "behavioral",
            Factor::Anomaly => "anomaly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub score: Score,
    pub reason: String,
}

impl FactorContribution {
    pub fn new(factor: Factor, score: Score, reason: impl Into<String>) -> Self {
        Self {
            factor,
            score,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub transaction_id: TransactionId,
    /// Sum of contributions capped at 1.0.
    pub score: Score,
    /// Uncapped sum of contributions.
    pub raw_score: Score,
    pub risk_level: RiskLevel,
    pub contributions: Vec<FactorContribution>,
}

impl RiskAssessment {
    pub fn from_contributions(
        transaction_id: TransactionId,
        contributions: Vec<FactorContribution>,
    ) -> Self {
        let raw_score: Score = contributions.iter().map(|c| c.score).sum();
        let score = raw_score.clamped();
        Self {
            transaction_id,
            score,
            raw_score,
            risk_level: RiskLevel::from_score(score),
            contributions,
        }
    }

    /// Total contributed by one factor group.
    pub fn contribution(&self, factor: Factor) -> Score {
        self.contributions
            .iter()
            .filter(|c| c.factor == factor)
            .map(|c| c.score)
            .sum()
    }

    /// Reasons of the factors that raised the score, in evaluation order.
    pub fn reasons(&self) -> String {
        self.contributions
            .iter()
            .filter(|c| !c.score.is_zero())
            .map(|c| c.reason.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
