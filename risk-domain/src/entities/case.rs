// Case entity
// Values handed to the external case-management workflow

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{CustomerId, RiskLevel, Score, TransactionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    Assigned,
    InProgress,
    Escalated,
    Closed,
    Blocked,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Assigned => "ASSIGNED",
            CaseStatus::InProgress => "IN_PROGRESS",
            CaseStatus::Escalated => "ESCALATED",
            CaseStatus::Closed => "CLOSED",
            CaseStatus::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASSIGNED" => Ok(CaseStatus::Assigned),
            "IN_PROGRESS" => Ok(CaseStatus::InProgress),
            "ESCALATED" => Ok(CaseStatus::Escalated),
            "CLOSED" => Ok(CaseStatus::Closed),
            "BLOCKED" => Ok(CaseStatus::Blocked),
            other => Err(DomainError::invalid(
                "case_status",
                format!("unknown case status '{other}'"),
            )),
        }
    }
}

/// Status written back to the transaction history once a transaction is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Flagged,
    Blocked,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Flagged => "FLAGGED",
            TransactionStatus::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An analyst case ready to be opened by the case-management collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub transaction_id: TransactionId,
    pub customer_id: Option<CustomerId>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub merchant_name: Option<String>,
    pub transaction_type: Option<String>,
    pub risk_score: Score,
    pub risk_level: RiskLevel,
    pub flagged_reason: String,
    pub status: CaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routing {
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseDraft>,
}
