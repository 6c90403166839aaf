//! Project id validation.
//!
//! Applied as a route layer to `/projects/{id}` only. The raw `id` segment
//! must be a hyphenated UUID; otherwise the request ends with
//! 400 `{"error": "Invalid project ID."}` and the handler never runs.

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::{IntoResponse, Response},
    RequestExt,
};

use crate::http::middleware::StageOutcome;
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::store::ProjectId;

/// Validate `raw_id` and, on success, attach the parsed [`ProjectId`] to the
/// request extensions.
pub fn check_project_id(raw_id: Option<&str>, mut request: Request) -> StageOutcome {
    match raw_id.map(str::parse::<ProjectId>) {
        Some(Ok(id)) => {
            request.extensions_mut().insert(id);
            StageOutcome::Continue(request)
        }
        _ => {
            tracing::debug!(raw_id = ?raw_id, "Rejected invalid project id");
            metrics::record_invalid_id();
            StageOutcome::ShortCircuit(ApiError::InvalidProjectId.into_response())
        }
    }
}

/// Middleware adapter for [`check_project_id`].
pub async fn validate_project_id(mut request: Request, next: Next) -> Response {
    let raw_id = request.extract_parts::<Path<String>>().await.ok();

    match check_project_id(raw_id.as_ref().map(|Path(id)| id.as_str()), request) {
        StageOutcome::Continue(request) => next.run(request).await,
        StageOutcome::ShortCircuit(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn request() -> Request {
        Request::builder().uri("/projects/x").body(Body::empty()).unwrap()
    }

    #[test]
    fn test_valid_id_continues_with_extension() {
        let raw = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        match check_project_id(Some(raw), request()) {
            StageOutcome::Continue(req) => {
                let id = req.extensions().get::<ProjectId>().unwrap();
                assert_eq!(id.to_string(), raw);
            }
            StageOutcome::ShortCircuit(_) => panic!("valid id was rejected"),
        }
    }

    #[test]
    fn test_invalid_id_short_circuits() {
        for raw in [Some("abc"), Some(""), None] {
            match check_project_id(raw, request()) {
                StageOutcome::ShortCircuit(resp) => assert_eq!(resp.status(), StatusCode::BAD_REQUEST),
                StageOutcome::Continue(_) => panic!("{raw:?} should be rejected"),
            }
        }
    }
}
