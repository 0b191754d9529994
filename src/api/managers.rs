/// Manager REST endpoints

use crate::{
    api::{AppState, ChangeNameRequest, UpdateProjectsRequest},
    error::StaffError,
    model::{Manager, Project},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

/// Request body for manager creation
#[derive(Debug, Deserialize)]
pub struct CreateManagerRequest {
    pub name: String,
}

pub fn create_manager_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/manager/new", post(create_manager))
        .route("/api/v1/manager/name", post(change_name))
        .route("/api/v1/manager/projects/add", post(add_project))
        .route("/api/v1/manager/projects/remove", post(remove_project))
        .route("/api/v1/manager/projects/{manager_id}", get(get_projects))
        .route("/api/v1/manager/{manager_id}", get(get_manager).delete(delete_manager))
}

/// GET /api/v1/manager/{managerId}
async fn get_manager(
    State(state): State<AppState>,
    Path(manager_id): Path<String>,
) -> Result<Json<Manager>, StaffError> {
    Ok(Json(state.managers.get_by_id(&manager_id).await?))
}

/// GET /api/v1/manager/projects/{managerId}
async fn get_projects(
    State(state): State<AppState>,
    Path(manager_id): Path<String>,
) -> Result<Json<Vec<Project>>, StaffError> {
    Ok(Json(state.managers.get_projects(&manager_id).await?))
}

/// POST /api/v1/manager/new
/// Body: { "name": "Alex" }
/// Returns: 201 with the new id as a JSON string
async fn create_manager(
    State(state): State<AppState>,
    Json(payload): Json<CreateManagerRequest>,
) -> Result<(StatusCode, Json<String>), StaffError> {
    let id = state.managers.create(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(id.to_string())))
}

/// DELETE /api/v1/manager/{managerId}
async fn delete_manager(
    State(state): State<AppState>,
    Path(manager_id): Path<String>,
) -> Result<StatusCode, StaffError> {
    state.managers.delete_by_id(&manager_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/manager/projects/add
/// Body: { "id": "<managerId>", "projectId": "..." }
async fn add_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProjectsRequest>,
) -> Result<StatusCode, StaffError> {
    state.managers.add_project(&payload.id, &payload.project_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/manager/projects/remove
async fn remove_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProjectsRequest>,
) -> Result<StatusCode, StaffError> {
    state.managers.remove_project(&payload.id, &payload.project_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/manager/name
/// Body: { "id": "...", "newName": "..." }
async fn change_name(
    State(state): State<AppState>,
    Json(payload): Json<ChangeNameRequest>,
) -> Result<StatusCode, StaffError> {
    state.managers.change_name(&payload.id, &payload.new_name).await?;
    Ok(StatusCode::OK)
}
