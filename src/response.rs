//! JSON response envelope shared by every API route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Machine-readable error class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    InvalidJson,
    NotFound,
    Conflict,
    BusinessRuleViolation,
    InternalError,
}

/// Field-level detail attached to an error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ErrorDetail {
    pub fn new(field: &str, message: impl Into<String>, code: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            code: code.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ErrorDetail>>,
    request_id: String,
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    success: bool,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct SuccessPayload<T> {
    success: bool,
    data: T,
}

/// `req_<unix millis>_<8 hex chars>`
pub fn request_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("req_{}_{}", Utc::now().timestamp_millis(), &suffix[..8])
}

pub fn api_success<T: Serialize>(data: T, status: StatusCode) -> Response {
    (status, Json(SuccessPayload { success: true, data })).into_response()
}

pub fn api_error(
    code: ErrorCode,
    message: impl Into<String>,
    status: StatusCode,
    details: Option<Vec<ErrorDetail>>,
) -> Response {
    let payload = ErrorPayload {
        success: false,
        error: ErrorBody {
            code,
            message: message.into(),
            details,
            request_id: request_id(),
        },
    };
    (status, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = request_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "req");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(
            serde_json::to_value(ErrorCode::BusinessRuleViolation).unwrap(),
            "BUSINESS_RULE_VIOLATION"
        );
        assert_eq!(serde_json::to_value(ErrorCode::InvalidJson).unwrap(), "INVALID_JSON");
    }
}
