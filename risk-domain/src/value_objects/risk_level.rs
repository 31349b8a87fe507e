// Risk level value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Score;

pub const HIGH_RISK_THRESHOLD: Score = Score::from_basis_points(8_000);
pub const MEDIUM_RISK_THRESHOLD: Score = Score::from_basis_points(5_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Thresholds are evaluated from the highest tier down.
    pub fn from_score(score: Score) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn requires_review(&self) -> bool {
        !matches!(self, RiskLevel::Low)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            other => Err(DomainError::invalid(
                "risk_level",
                format!("unknown risk level '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(RiskLevel::from_score(Score::from_basis_points(8_000)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(Score::from_basis_points(7_999)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(Score::from_basis_points(5_000)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(Score::from_basis_points(4_999)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Score::ZERO), RiskLevel::Low);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" high ".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert_eq!("Medium".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
        assert!("CRITICAL".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).expect("json");
        assert_eq!(json, "\"MEDIUM\"");
    }
}
