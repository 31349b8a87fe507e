//! Transaction risk scoring.
//!
//! A score is the sum of independent factor contributions:
//!
//! | factor     | condition                                   | contribution |
//! |------------|---------------------------------------------|--------------|
//! | amount     | amount > 10,000,000                         | 0.4          |
//! | amount     | 1,000,000 <= amount <= 10,000,000           | 0.2          |
//! | merchant   | high-risk / unknown / known                 | 0.3 / 0.2 / 0|
//! | location   | high-risk / unknown / known                 | 0.2 / 0.1 / 0|
//! | behavioral | off-hours timestamp                         | +0.1         |
//! | behavioral | online channel with a high-tier amount      | +0.1         |
//! | anomaly    | external model score in [0, 1], scaled      | 0 to 0.2     |
//!
//! The reported score is capped at 1.0; the uncapped sum is kept as
//! `raw_score`. The scorer does no I/O and holds no mutable state.

use chrono::Timelike;
use rust_decimal::Decimal;

use crate::entities::{
    Factor, FactorContribution, RawTransaction, Reputation, RiskAssessment, Transaction,
};
use crate::error::DomainResult;
use crate::ports::ReputationLookup;
use crate::value_objects::{AnomalyScore, BusinessHours, Channel, Score};

pub const AMOUNT_HIGH_THRESHOLD: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);
pub const AMOUNT_MEDIUM_THRESHOLD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

pub const AMOUNT_HIGH_WEIGHT: Score = Score::from_basis_points(4_000);
pub const AMOUNT_MEDIUM_WEIGHT: Score = Score::from_basis_points(2_000);
pub const MERCHANT_HIGH_RISK_WEIGHT: Score = Score::from_basis_points(3_000);
pub const MERCHANT_UNKNOWN_WEIGHT: Score = Score::from_basis_points(2_000);
pub const LOCATION_HIGH_RISK_WEIGHT: Score = Score::from_basis_points(2_000);
pub const LOCATION_UNKNOWN_WEIGHT: Score = Score::from_basis_points(1_000);
pub const OFF_HOURS_WEIGHT: Score = Score::from_basis_points(1_000);
pub const ONLINE_HIGH_VALUE_WEIGHT: Score = Score::from_basis_points(1_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountTier {
    Low,
    Medium,
    High,
}

impl AmountTier {
    fn of(amount: Decimal) -> Self {
        if amount > AMOUNT_HIGH_THRESHOLD {
            AmountTier::High
        } else if amount >= AMOUNT_MEDIUM_THRESHOLD {
            AmountTier::Medium
        } else {
            AmountTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskScorer {
    business_hours: BusinessHours,
}

impl RiskScorer {
    pub fn new(business_hours: BusinessHours) -> Self {
        Self { business_hours }
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    pub fn score<M, L>(
        &self,
        transaction: &Transaction,
        merchants: &M,
        locations: &L,
        anomaly: Option<AnomalyScore>,
    ) -> RiskAssessment
    where
        M: ReputationLookup + ?Sized,
        L: ReputationLookup + ?Sized,
    {
        let amount_tier = AmountTier::of(transaction.amount);
        let mut contributions = Vec::with_capacity(6);

        contributions.push(amount_contribution(transaction.amount, amount_tier));
        contributions.push(merchant_contribution(
            transaction.merchant_name.as_deref(),
            merchants,
        ));
        contributions.push(location_contribution(
            transaction.location.as_deref(),
            locations,
        ));

        if let Some(timestamp) = transaction.timestamp {
            let hour = timestamp.hour();
            if !self.business_hours.contains(hour) {
                contributions.push(FactorContribution::new(
                    Factor::Behavioral,
                    OFF_HOURS_WEIGHT,
                    format!("off-hours transaction at {hour:02}:00"),
                ));
            }
        }
        if transaction.channel == Some(Channel::Online) && amount_tier == AmountTier::High {
            contributions.push(FactorContribution::new(
                Factor::Behavioral,
                ONLINE_HIGH_VALUE_WEIGHT,
                "large online transaction",
            ));
        }

        if let Some(anomaly) = anomaly {
            contributions.push(FactorContribution::new(
                Factor::Anomaly,
                anomaly.contribution(),
                format!("anomaly model score {:.3}", anomaly.value()),
            ));
        }

        RiskAssessment::from_contributions(transaction.transaction_id.clone(), contributions)
    }

    /// Validates an unchecked record and scores it. Any malformed field is
    /// reported as InvalidInput and no assessment is produced.
    pub fn score_raw<M, L>(
        &self,
        raw: RawTransaction,
        merchants: &M,
        locations: &L,
        anomaly: Option<f64>,
    ) -> DomainResult<RiskAssessment>
    where
        M: ReputationLookup + ?Sized,
        L: ReputationLookup + ?Sized,
    {
        let transaction = Transaction::try_from(raw)?;
        let anomaly = anomaly.map(AnomalyScore::new).transpose()?;
        Ok(self.score(&transaction, merchants, locations, anomaly))
    }
}

fn amount_contribution(amount: Decimal, tier: AmountTier) -> FactorContribution {
    match tier {
        AmountTier::High => FactorContribution::new(
            Factor::Amount,
            AMOUNT_HIGH_WEIGHT,
            format!("high amount: {}", amount.normalize()),
        ),
        AmountTier::Medium => FactorContribution::new(
            Factor::Amount,
            AMOUNT_MEDIUM_WEIGHT,
            format!("medium amount: {}", amount.normalize()),
        ),
        AmountTier::Low => FactorContribution::new(Factor::Amount, Score::ZERO, "low amount"),
    }
}

fn merchant_contribution<M>(merchant: Option<&str>, merchants: &M) -> FactorContribution
where
    M: ReputationLookup + ?Sized,
{
    let name = merchant.unwrap_or_default();
    match merchants.reputation(name) {
        Reputation::HighRisk => FactorContribution::new(
            Factor::Merchant,
            MERCHANT_HIGH_RISK_WEIGHT,
            format!("high-risk merchant: {name}"),
        ),
        Reputation::Unknown => FactorContribution::new(
            Factor::Merchant,
            MERCHANT_UNKNOWN_WEIGHT,
            format!("unknown merchant: {}", display_name(name)),
        ),
        Reputation::Known => {
            FactorContribution::new(Factor::Merchant, Score::ZERO, format!("known merchant: {name}"))
        }
    }
}

fn location_contribution<L>(location: Option<&str>, locations: &L) -> FactorContribution
where
    L: ReputationLookup + ?Sized,
{
    let name = location.unwrap_or_default();
    match locations.reputation(name) {
        Reputation::HighRisk => FactorContribution::new(
            Factor::Location,
            LOCATION_HIGH_RISK_WEIGHT,
            format!("high-risk location: {name}"),
        ),
        Reputation::Unknown => FactorContribution::new(
            Factor::Location,
            LOCATION_UNKNOWN_WEIGHT,
            format!("unknown location: {}", display_name(name)),
        ),
        Reputation::Known => {
            FactorContribution::new(Factor::Location, Score::ZERO, format!("known location: {name}"))
        }
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "<missing>"
    } else {
        name
    }
}
