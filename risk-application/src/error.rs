use risk_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    /// A transaction or model input that failed validation; carries the offending field.
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
