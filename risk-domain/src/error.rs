use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// The only way scoring can fail: the caller handed over something that is not
/// a usable transaction. Nothing is guessed or defaulted in its place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidInput { field, .. } => field,
        }
    }
}
