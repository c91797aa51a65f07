//! Caller-facing errors for the signup path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Why a signup was rejected. Both kinds are caller input errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    /// No activity with this exact (case-sensitive) name.
    #[error("Activity not found")]
    NotFound,

    /// The email is already on this activity's roster.
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadyRegistered => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        detail_response(self.status(), self.to_string())
    }
}

/// Error body shared by every non-2xx JSON answer: `{"detail": ...}`.
pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_messages() {
        assert_eq!(SignupError::NotFound.to_string(), "Activity not found");
        assert_eq!(
            SignupError::AlreadyRegistered.to_string(),
            "Student already signed up for this activity"
        );
    }

    #[test]
    fn test_detail_response_status() {
        let resp = detail_response(StatusCode::BAD_REQUEST, "missing field `email`");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(SignupError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            SignupError::AlreadyRegistered.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
