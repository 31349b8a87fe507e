use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use risk_application::AppError;
use risk_domain::DomainError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    /// Rejected transaction input, reported with the field that failed.
    InvalidInput(DomainError),
    NotFound,
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            AppError::InvalidInput(err) => HttpError::InvalidInput(err),
            AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl HttpError {
    fn status(&self) -> StatusCode {
        match self {
            HttpError::Unauthorized => StatusCode::UNAUTHORIZED,
            HttpError::BadRequest(_) | HttpError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            HttpError::Unauthorized => ErrorBody {
                error: "unauthorized".to_string(),
                field: None,
            },
            HttpError::BadRequest(msg) => ErrorBody {
                error: format!("bad request: {}", msg),
                field: None,
            },
            HttpError::InvalidInput(err) => ErrorBody {
                field: Some(err.field()),
                error: err.to_string(),
            },
            HttpError::NotFound => ErrorBody {
                error: "not found".to_string(),
                field: None,
            },
            // Internal details go to the log, not the client.
            HttpError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                ErrorBody {
                    error: "internal error".to_string(),
                    field: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
