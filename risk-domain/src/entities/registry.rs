// Reputation registry entity
// Known and high-risk names for merchants and locations

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reputation {
    Known,
    HighRisk,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    Merchants,
    Locations,
}

impl RegistryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryKind::Merchants => "merchants",
            RegistryKind::Locations => "locations",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merchants" | "merchant" => Ok(RegistryKind::Merchants),
            "locations" | "location" => Ok(RegistryKind::Locations),
            other => Err(DomainError::invalid(
                "registry",
                format!("unknown registry '{other}', expected merchants or locations"),
            )),
        }
    }
}

/// Registry names are compared trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryLists {
    #[serde(default)]
    pub known: Vec<String>,
    #[serde(default)]
    pub high_risk: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegistryLists", into = "RegistryLists")]
pub struct RiskRegistry {
    known: BTreeSet<String>,
    high_risk: BTreeSet<String>,
}

impl RiskRegistry {
    pub fn new<I, J, S, T>(known: I, high_risk: J) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            known: normalize_all(known)?,
            high_risk: normalize_all(high_risk)?,
        })
    }

    /// A name on the high-risk list is high-risk even if it is also listed as known.
    pub fn reputation(&self, name: &str) -> Reputation {
        let key = normalize_name(name);
        if key.is_empty() {
            return Reputation::Unknown;
        }
        if self.high_risk.contains(&key) {
            Reputation::HighRisk
        } else if self.known.contains(&key) {
            Reputation::Known
        } else {
            Reputation::Unknown
        }
    }

    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    pub fn high_risk(&self) -> impl Iterator<Item = &str> {
        self.high_risk.iter().map(String::as_str)
    }

    pub fn merge(&mut self, other: RiskRegistry) {
        self.known.extend(other.known);
        self.high_risk.extend(other.high_risk);
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.high_risk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.high_risk.is_empty()
    }
}

fn normalize_all<I, S>(names: I) -> DomainResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let normalized = normalize_name(name.as_ref());
            if normalized.is_empty() {
                Err(DomainError::invalid("registry", "entry name is empty"))
            } else {
                Ok(normalized)
            }
        })
        .collect()
}

impl TryFrom<RegistryLists> for RiskRegistry {
    type Error = DomainError;

    fn try_from(lists: RegistryLists) -> DomainResult<Self> {
        RiskRegistry::new(lists.known, lists.high_risk)
    }
}

impl From<RiskRegistry> for RegistryLists {
    fn from(registry: RiskRegistry) -> Self {
        Self {
            known: registry.known.into_iter().collect(),
            high_risk: registry.high_risk.into_iter().collect(),
        }
    }
}

/// Snapshot of both registries handed to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registries {
    #[serde(default)]
    pub merchants: RiskRegistry,
    #[serde(default)]
    pub locations: RiskRegistry,
}

impl Registries {
    pub fn get(&self, kind: RegistryKind) -> &RiskRegistry {
        match kind {
            RegistryKind::Merchants => &self.merchants,
            RegistryKind::Locations => &self.locations,
        }
    }

    pub fn get_mut(&mut self, kind: RegistryKind) -> &mut RiskRegistry {
        match kind {
            RegistryKind::Merchants => &mut self.merchants,
            RegistryKind::Locations => &mut self.locations,
        }
    }
}
