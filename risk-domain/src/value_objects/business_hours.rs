// Business hours value object

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Inclusive range of wall-clock hours treated as normal trading time.
/// Anything outside it counts as an off-hours transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessHours {
    start: u32,
    end: u32,
}

impl BusinessHours {
    pub fn new(start: u32, end: u32) -> DomainResult<Self> {
        if start > 23 || end > 23 {
            return Err(DomainError::invalid(
                "business_hours",
                format!("hours must be within 0..=23, got {start}..={end}"),
            ));
        }
        if start > end {
            return Err(DomainError::invalid(
                "business_hours",
                format!("start {start} is after end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { start: 6, end: 22 }
    }
}
