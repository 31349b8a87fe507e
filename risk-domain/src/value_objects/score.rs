// Score value objects
// Scores are held in basis points (1.0 == 10_000) so sums and threshold
// comparisons are exact.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

pub const BASIS_POINTS: u32 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(BASIS_POINTS);

    pub const fn from_basis_points(points: u32) -> Self {
        Self(points)
    }

    pub const fn basis_points(self) -> u32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / f64::from(BASIS_POINTS)
    }

    pub fn clamped(self) -> Self {
        Self(self.0.min(BASIS_POINTS))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.value())
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "score must be a non-negative number, got {value}"
            )));
        }
        Ok(Score((value * f64::from(BASIS_POINTS)).round() as u32))
    }
}

/// Output of the external anomaly model, normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnomalyScore(f64);

impl AnomalyScore {
    /// Largest contribution an anomaly can add to a risk score.
    pub const MAX_CONTRIBUTION: Score = Score::from_basis_points(2_000);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid(
                "anomaly_score",
                "must be a finite number",
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::invalid(
                "anomaly_score",
                format!("must be within [0, 1], got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Reads an optional model score from request JSON; `null` means no score.
    pub fn from_json(value: &Value) -> DomainResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| DomainError::invalid("anomaly_score", "must be a number"))
                .and_then(Self::new)
                .map(Some),
            _ => Err(DomainError::invalid("anomaly_score", "must be a number")),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn contribution(self) -> Score {
        let scaled = self.0 * f64::from(Self::MAX_CONTRIBUTION.basis_points());
        Score(scaled.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_point_sums_hit_thresholds_exactly() {
        let total: Score = [4_000, 3_000, 1_000]
            .into_iter()
            .map(Score::from_basis_points)
            .sum();
        assert_eq!(total, Score::from_basis_points(8_000));
        assert_eq!(total.value(), 0.8);
    }

    #[test]
    fn clamp_caps_at_one() {
        let score = Score::from_basis_points(11_000);
        assert_eq!(score.clamped(), Score::MAX);
        assert_eq!(Score::from_basis_points(9_000).clamped().value(), 0.9);
    }

    #[test]
    fn score_serializes_as_fraction() {
        let json = serde_json::to_string(&Score::from_basis_points(4_000)).expect("json");
        assert_eq!(json, "0.4");
        let back: Score = serde_json::from_str("0.25").expect("score");
        assert_eq!(back.basis_points(), 2_500);
    }

    #[test]
    fn anomaly_scales_into_contribution_range() {
        assert_eq!(AnomalyScore::new(0.0).expect("zero").contribution(), Score::ZERO);
        assert_eq!(
            AnomalyScore::new(1.0).expect("one").contribution(),
            AnomalyScore::MAX_CONTRIBUTION
        );
        assert_eq!(
            AnomalyScore::new(0.5).expect("half").contribution(),
            Score::from_basis_points(1_000)
        );
    }

    #[test]
    fn anomaly_from_json_accepts_null_and_numbers_only() {
        assert_eq!(AnomalyScore::from_json(&Value::Null).expect("null"), None);
        let parsed = AnomalyScore::from_json(&serde_json::json!(0.25)).expect("number");
        assert_eq!(parsed.map(AnomalyScore::value), Some(0.25));
        let err = AnomalyScore::from_json(&serde_json::json!("high")).unwrap_err();
        assert_eq!(err.field(), "anomaly_score");
    }

    #[test]
    fn anomaly_rejects_out_of_range_values() {
        assert!(AnomalyScore::new(-0.1).is_err());
        assert!(AnomalyScore::new(1.5).is_err());
        let err = AnomalyScore::new(f64::NAN).unwrap_err();
        assert_eq!(err.field(), "anomaly_score");
    }
}
