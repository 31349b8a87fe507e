// Liquidity coverage
// Ratio of high-quality liquid assets to expected net cash outflows

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

pub const LCR_OK_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
pub const LCR_WARNING_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiquidityStatus {
    Ok,
    Warning,
    Critical,
}

impl LiquidityStatus {
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio >= LCR_OK_THRESHOLD {
            LiquidityStatus::Ok
        } else if ratio >= LCR_WARNING_THRESHOLD {
            LiquidityStatus::Warning
        } else {
            LiquidityStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityStatus::Ok => "OK",
            LiquidityStatus::Warning => "WARNING",
            LiquidityStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LiquidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidityMetrics {
    pub liquidity_coverage_ratio: Decimal,
    pub liquid_assets: Decimal,
    pub net_cash_outflows: Decimal,
    pub status: LiquidityStatus,
}

pub fn liquidity_coverage(
    liquid_assets: Decimal,
    net_cash_outflows: Decimal,
) -> DomainResult<LiquidityMetrics> {
    if liquid_assets.is_sign_negative() && !liquid_assets.is_zero() {
        return Err(DomainError::invalid("liquid_assets", "must not be negative"));
    }
    if net_cash_outflows <= Decimal::ZERO {
        return Err(DomainError::invalid(
            "net_cash_outflows",
            "must be greater than zero",
        ));
    }
    let ratio = liquid_assets
        .checked_div(net_cash_outflows)
        .ok_or_else(|| DomainError::invalid("liquid_assets", "ratio is out of range"))?
        .round_dp(4);
    Ok(LiquidityMetrics {
        liquidity_coverage_ratio: ratio,
        liquid_assets,
        net_cash_outflows,
        status: LiquidityStatus::from_ratio(ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds_are_inclusive() {
        let at = |assets: i64| {
            liquidity_coverage(Decimal::from(assets), Decimal::from(100))
                .expect("metrics")
                .status
        };
        assert_eq!(at(150), LiquidityStatus::Ok);
        assert_eq!(at(100), LiquidityStatus::Ok);
        assert_eq!(at(80), LiquidityStatus::Warning);
        assert_eq!(at(79), LiquidityStatus::Critical);
    }

    #[test]
    fn zero_outflows_are_rejected() {
        let err = liquidity_coverage(Decimal::from(10), Decimal::ZERO).unwrap_err();
        assert_eq!(err.field(), "net_cash_outflows");
        assert!(liquidity_coverage(Decimal::from(-1), Decimal::ONE).is_err());
    }

    #[test]
    fn ratio_is_rounded_to_four_places() {
        let metrics = liquidity_coverage(Decimal::from(1), Decimal::from(3)).expect("metrics");
        assert_eq!(metrics.liquidity_coverage_ratio.to_string(), "0.3333");
        assert_eq!(metrics.status.to_string(), "CRITICAL");
    }
}
