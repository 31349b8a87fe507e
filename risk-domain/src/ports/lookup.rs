use crate::entities::{Reputation, RiskRegistry};

/// Classifies a merchant or location name. The scorer only ever sees this
/// capability, never where the names come from.
pub trait ReputationLookup: Send + Sync {
    fn reputation(&self, name: &str) -> Reputation;
}

impl ReputationLookup for RiskRegistry {
    fn reputation(&self, name: &str) -> Reputation {
        RiskRegistry::reputation(self, name)
    }
}

impl<F> ReputationLookup for F
where
    F: Fn(&str) -> Reputation + Send + Sync,
{
    fn reputation(&self, name: &str) -> Reputation {
        self(name)
    }
}
