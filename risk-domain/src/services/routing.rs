use crate::entities::{CaseDraft, CaseStatus, RiskAssessment, Routing, Transaction, TransactionStatus};
use crate::value_objects::RiskLevel;

/// Decides what happens to a scored transaction. LOW is approved outright,
/// MEDIUM is flagged and HIGH is blocked; both of the latter open an analyst case.
pub fn route(transaction: &Transaction, assessment: &RiskAssessment) -> Routing {
    let status = match assessment.risk_level {
        RiskLevel::Low => TransactionStatus::Approved,
        RiskLevel::Medium => TransactionStatus::Flagged,
        RiskLevel::High => TransactionStatus::Blocked,
    };
    let case = assessment
        .risk_level
        .requires_review()
        .then(|| CaseDraft {
            transaction_id: transaction.transaction_id.clone(),
            customer_id: transaction.customer_id.clone(),
            amount: transaction.amount,
            currency: transaction.currency.clone(),
            merchant_name: transaction.merchant_name.clone(),
            transaction_type: transaction.transaction_type.clone(),
            risk_score: assessment.score,
            risk_level: assessment.risk_level,
            flagged_reason: assessment.reasons(),
            status: CaseStatus::Assigned,
        });
    Routing { status, case }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Factor, FactorContribution};
    use crate::value_objects::Score;
    use rust_decimal::Decimal;

    fn assessed(points: u32) -> (Transaction, RiskAssessment) {
        let transaction = Transaction::new("TXN100", Decimal::from(3_000_000))
            .with_customer("CUST7")
            .with_currency("KES")
            .with_merchant("Unknown Shell Co");
        let assessment = RiskAssessment::from_contributions(
            transaction.transaction_id.clone(),
            vec![FactorContribution::new(
                Factor::Merchant,
                Score::from_basis_points(points),
                "unknown merchant: Unknown Shell Co",
            )],
        );
        (transaction, assessment)
    }

    #[test]
    fn low_risk_is_approved_without_case() {
        let (transaction, assessment) = assessed(2_000);
        let routing = route(&transaction, &assessment);
        assert_eq!(routing.status, TransactionStatus::Approved);
        assert!(routing.case.is_none());
    }

    #[test]
    fn medium_risk_is_flagged_with_assigned_case() {
        let (transaction, assessment) = assessed(5_000);
        let routing = route(&transaction, &assessment);
        assert_eq!(routing.status, TransactionStatus::Flagged);
        let case = routing.case.expect("case");
        assert_eq!(case.status, CaseStatus::Assigned);
        assert_eq!(case.risk_level, RiskLevel::Medium);
        assert_eq!(case.customer_id.map(|id| id.0), Some("CUST7".to_string()));
        assert_eq!(case.flagged_reason, "unknown merchant: Unknown Shell Co");
    }

    #[test]
    fn high_risk_is_blocked_with_case() {
        let (transaction, assessment) = assessed(8_500);
        let routing = route(&transaction, &assessment);
        assert_eq!(routing.status, TransactionStatus::Blocked);
        assert_eq!(routing.case.map(|case| case.risk_score), Some(Score::from_basis_points(8_500)));
    }
}
