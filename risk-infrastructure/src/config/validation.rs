use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use risk_domain::BusinessHours;

pub fn validate_bind_addr(value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|err| anyhow!("invalid bind_addr '{}': {}", value, err))
}

pub fn validate_business_hours(start: u32, end: u32) -> Result<BusinessHours> {
    BusinessHours::new(start, end).map_err(|err| anyhow!("invalid business hours: {}", err))
}
