//! Route handlers for the projects API.
//!
//! Each handler performs exactly one store operation. Id-bearing routes
//! receive the already validated `ProjectId` from the request extensions.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::http::request::{JsonBody, ListQuery};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::{Project, ProjectDraft, ProjectId};

/// `GET /projects`
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Project>> {
    Json(state.store.list(query.title_filter()))
}

/// `POST /projects`
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> Json<Project> {
    let project = state.store.create(draft);
    tracing::debug!(id = %project.id, "Project created");
    Json(project)
}

/// `PUT /projects/{id}`
pub async fn replace_project(
    State(state): State<AppState>,
    Extension(id): Extension<ProjectId>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> Result<Json<Project>, ApiError> {
    let project = state.store.replace(&id, draft)?;
    tracing::debug!(id = %id, "Project replaced");
    Ok(Json(project))
}

/// `DELETE /projects/{id}`
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(id): Extension<ProjectId>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id)?;
    tracing::debug!(id = %id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
