//! Response shaping for API errors.
//!
//! Every failure leaves the service as a JSON object `{"error": "..."}` with
//! the status code that classifies it.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Client-facing error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path `id` segment is not a hyphenated UUID.
    #[error("Invalid project ID.")]
    InvalidProjectId,

    /// No project with the requested id.
    #[error("Project not found.")]
    NotFound,

    /// Body could not be decoded as the expected JSON document.
    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidProjectId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedBody { status, .. } => *status,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProjectId;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::InvalidProjectId.to_string(), "Invalid project ID.");
        assert_eq!(ApiError::NotFound.to_string(), "Project not found.");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidProjectId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(StoreError::NotFound(ProjectId::new_v4())).status(),
            StatusCode::NOT_FOUND
        );
        let malformed = ApiError::MalformedBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad".into(),
        };
        assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(malformed.to_string(), "bad");
    }
}
