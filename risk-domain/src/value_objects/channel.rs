// Channel value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Mobile,
    Atm,
    Branch,
    Online,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Mobile => "mobile",
            Channel::Atm => "atm",
            Channel::Branch => "branch",
            Channel::Online => "online",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(Channel::Mobile),
            "atm" => Ok(Channel::Atm),
            "branch" => Ok(Channel::Branch),
            "online" => Ok(Channel::Online),
            other => Err(DomainError::invalid(
                "channel",
                format!("unknown channel '{other}', expected mobile, atm, branch or online"),
            )),
        }
    }
}
