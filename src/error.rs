//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::bookings::{BookingStatus, StatusError};
use crate::response::{api_error, ErrorCode, ErrorDetail};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidJson(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<ErrorDetail>,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{message}")]
    BusinessRule {
        message: String,
        details: Vec<ErrorDetail>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure on a single field
    pub fn invalid_field(field: &str, message: impl Into<String>, code: &str) -> Self {
        let message = message.into();
        AppError::Validation {
            message: message.clone(),
            details: vec![ErrorDetail::new(field, message, code)],
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BusinessRule { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::UnknownStatusValue(_) => {
                let allowed: Vec<&str> = BookingStatus::ALL.iter().map(|s| s.as_str()).collect();
                AppError::Validation {
                    message: "Invalid status".to_string(),
                    details: vec![ErrorDetail::new(
                        "status",
                        format!("Must be one of: {}", allowed.join(", ")),
                        "INVALID_ENUM",
                    )],
                }
            }
            StatusError::IllegalTransition { .. } => {
                let message = err.to_string();
                AppError::BusinessRule {
                    details: vec![ErrorDetail::new("status", message.clone(), "INVALID_TRANSITION")],
                    message,
                }
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Validation {
                message: e.body_text(),
                details: Vec::new(),
            },
            other => AppError::InvalidJson(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::InvalidJson(msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                api_error(ErrorCode::InvalidJson, "Invalid request body", status, None)
            }
            AppError::Validation { message, details } => {
                let details = (!details.is_empty()).then_some(details);
                api_error(ErrorCode::ValidationError, message, status, details)
            }
            AppError::NotFound(entity) => {
                api_error(ErrorCode::NotFound, format!("{} not found", entity), status, None)
            }
            AppError::Conflict(msg) => api_error(ErrorCode::Conflict, msg, status, None),
            AppError::BusinessRule { message, details } => {
                api_error(ErrorCode::BusinessRuleViolation, message, status, Some(details))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                api_error(ErrorCode::InternalError, "Database error", status, None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                api_error(ErrorCode::InternalError, "Internal error", status, None)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_maps_to_bad_request() {
        let err = AppError::from(StatusError::UnknownStatusValue("archived".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details[0].code, "INVALID_ENUM");
                assert!(details[0].message.contains("pending, confirmed, completed, cancelled"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_illegal_transition_maps_to_unprocessable() {
        let err = AppError::from(StatusError::IllegalTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Pending,
            allowed: &[],
        });
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        match err {
            AppError::BusinessRule { message, details } => {
                assert_eq!(
                    message,
                    "Cannot transition from 'completed' to 'pending'. Allowed: none"
                );
                assert_eq!(details[0].code, "INVALID_TRANSITION");
                assert_eq!(
                    details[0].message,
                    "Cannot transition from 'completed' to 'pending'. Allowed: none"
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_internal_errors_are_500() {
        assert_eq!(
            AppError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
