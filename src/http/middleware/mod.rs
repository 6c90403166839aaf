//! Request pipeline stages.
//!
//! # Order
//! ```text
//! TraceLayer (spans)
//!     → CORS (permissive, optional)
//!     → body limit
//!     → request_log (label + elapsed time)
//!     → project_id (only on /projects/{id})
//!     → handler
//! ```
//!
//! Stages that can reject a request are written as plain functions returning
//! a [`StageOutcome`]; the axum middleware adapters only translate that
//! outcome into "call next" or "respond now".

pub mod project_id;
pub mod request_log;

use axum::{extract::Request, response::Response};
use tower_http::cors::CorsLayer;

pub use project_id::{check_project_id, validate_project_id};
pub use request_log::{log_request, request_label};

/// Result of a single pipeline stage.
#[derive(Debug)]
pub enum StageOutcome {
    /// Pass the (possibly annotated) request to the next stage.
    Continue(Request),
    /// Stop here and send this response.
    ShortCircuit(Response),
}

/// Cross-origin policy: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
