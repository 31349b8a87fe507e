//! Customer credit risk from transaction history.
//!
//! Two signals, summed and capped at 1.0:
//! - velocity: the busiest day moved more than five times the average daily volume (+0.3)
//! - large transactions: more than 10% of the history is above 1,000,000 (+0.2)
//!
//! An empty history cannot be judged either way and scores a neutral 0.5.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities::Transaction;
use crate::value_objects::{RiskLevel, Score};

use super::scorer::AMOUNT_MEDIUM_THRESHOLD;

pub const VELOCITY_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
pub const VELOCITY_WEIGHT: Score = Score::from_basis_points(3_000);
pub const LARGE_TRANSACTION_WEIGHT: Score = Score::from_basis_points(2_000);
pub const NO_HISTORY_SCORE: Score = Score::from_basis_points(5_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditRiskAssessment {
    pub score: Score,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
}

impl CreditRiskAssessment {
    fn new(score: Score, reasons: Vec<String>) -> Self {
        let score = score.clamped();
        Self {
            score,
            risk_level: RiskLevel::from_score(score),
            reasons,
        }
    }
}

pub fn assess_credit_risk(history: &[Transaction]) -> CreditRiskAssessment {
    if history.is_empty() {
        return CreditRiskAssessment::new(
            NO_HISTORY_SCORE,
            vec!["no transaction history available".to_string()],
        );
    }

    let mut score = Score::ZERO;
    let mut reasons = Vec::new();

    if has_high_velocity(history) {
        score = score + VELOCITY_WEIGHT;
        reasons.push("high transaction velocity".to_string());
    }

    let large = history
        .iter()
        .filter(|txn| txn.amount > AMOUNT_MEDIUM_THRESHOLD)
        .count();
    if large * 10 > history.len() {
        score = score + LARGE_TRANSACTION_WEIGHT;
        reasons.push(format!(
            "frequent large transactions: {} of {}",
            large,
            history.len()
        ));
    }

    CreditRiskAssessment::new(score, reasons)
}

/// Undated transactions do not take part in the daily volume comparison.
fn has_high_velocity(history: &[Transaction]) -> bool {
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for txn in history {
        if let Some(timestamp) = txn.timestamp {
            let volume = daily.entry(timestamp.date_naive()).or_default();
            *volume = volume.saturating_add(txn.amount);
        }
    }
    if daily.is_empty() {
        return false;
    }

    let total = daily
        .values()
        .fold(Decimal::ZERO, |acc, volume| acc.saturating_add(*volume));
    let Some(average) = total.checked_div(Decimal::from(daily.len())) else {
        return false;
    };
    let max = daily.values().copied().max().unwrap_or(Decimal::ZERO);
    max > average.saturating_mul(VELOCITY_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn txn(day: u32, amount: i64) -> Transaction {
        let ts = DateTime::parse_from_rfc3339(&format!("2024-05-{day:02}T10:00:00Z"))
            .expect("timestamp");
        Transaction::new(format!("T{day}"), Decimal::from(amount)).with_timestamp(ts)
    }

    #[test]
    fn empty_history_is_neutral() {
        let assessment = assess_credit_risk(&[]);
        assert_eq!(assessment.score, NO_HISTORY_SCORE);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn steady_small_history_scores_zero() {
        let history: Vec<_> = (1..=10).map(|day| txn(day, 50_000)).collect();
        let assessment = assess_credit_risk(&history);
        assert_eq!(assessment.score, Score::ZERO);
        assert!(assessment.reasons.is_empty());
    }

    #[test]
    fn spike_day_flags_velocity() {
        let mut history: Vec<_> = (1..=9).map(|day| txn(day, 10_000)).collect();
        history.push(txn(10, 900_000));
        let assessment = assess_credit_risk(&history);
        assert_eq!(assessment.score, VELOCITY_WEIGHT);
        assert_eq!(assessment.reasons, ["high transaction velocity"]);
    }

    #[test]
    fn large_share_above_ten_percent_is_flagged() {
        let mut history: Vec<_> = (1..=8).map(|day| txn(day, 2_000_000)).collect();
        history.push(txn(9, 1_000_000));
        let assessment = assess_credit_risk(&history);
        assert_eq!(assessment.score, LARGE_TRANSACTION_WEIGHT);

        // exactly 10% is not "more than" 10%
        let mut history: Vec<_> = (1..=9).map(|day| txn(day, 100)).collect();
        history.push(txn(10, 100));
        history[0] = txn(1, 5_000_000);
        let assessment = assess_credit_risk(&history);
        assert!(!assessment.reasons.iter().any(|r| r.starts_with("frequent")));
    }

    #[test]
    fn both_signals_stack() {
        let mut history: Vec<_> = (1..=9).map(|day| txn(day, 10)).collect();
        history.push(txn(10, 50_000_000));
        history.push(txn(10, 50_000_000));
        let assessment = assess_credit_risk(&history);
        assert_eq!(assessment.score, Score::from_basis_points(5_000));
        assert_eq!(assessment.reasons.len(), 2);
    }

    #[test]
    fn undated_history_skips_velocity() {
        let history = vec![Transaction::new("U1", Decimal::from(10))];
        assert_eq!(assess_credit_risk(&history).score, Score::ZERO);
    }
}
