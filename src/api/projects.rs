/// Project REST endpoints
///
/// Link endpoints here are the project-side entry points; the work is done
/// by the manager and programmer coordinators.

use crate::{
    api::AppState,
    error::StaffError,
    model::{Manager, Programmer, Project},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub project_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagersRequest {
    pub project_id: String,
    pub manager_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgrammersRequest {
    pub project_id: String,
    pub programmer_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeProjectNameRequest {
    pub project_id: String,
    pub new_name: String,
}

pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/project/new", post(create_project))
        .route("/api/v1/project/name", post(change_name))
        .route("/api/v1/project/managers/add", post(add_manager))
        .route("/api/v1/project/managers/remove", post(remove_manager))
        .route("/api/v1/project/managers/{project_id}", get(get_managers))
        .route("/api/v1/project/programmers/add", post(add_programmer))
        .route("/api/v1/project/programmers/remove", post(remove_programmer))
        .route("/api/v1/project/programmers/{project_id}", get(get_programmers))
        .route("/api/v1/project/{project_id}", get(get_project).delete(delete_project))
}

/// GET /api/v1/project/{projectId}
async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, StaffError> {
    Ok(Json(state.projects.get_by_id(&project_id).await?))
}

/// GET /api/v1/project/managers/{projectId}
async fn get_managers(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Manager>>, StaffError> {
    Ok(Json(state.projects.get_managers(&project_id).await?))
}

/// GET /api/v1/project/programmers/{projectId}
async fn get_programmers(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Programmer>>, StaffError> {
    Ok(Json(state.projects.get_programmers(&project_id).await?))
}

/// POST /api/v1/project/new
/// Body: { "projectName": "ukrposhta" }
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<String>), StaffError> {
    let id = state.projects.create(&payload.project_name).await?;
    Ok((StatusCode::CREATED, Json(id.to_string())))
}

/// DELETE /api/v1/project/{projectId}
async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, StaffError> {
    state.projects.delete_by_id(&project_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/project/managers/add
/// Body: { "projectId": "...", "managerId": "..." }
async fn add_manager(
    State(state): State<AppState>,
    Json(payload): Json<UpdateManagersRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .projects
        .add_manager_to_project(&payload.project_id, &payload.manager_id)
        .await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/project/managers/remove
async fn remove_manager(
    State(state): State<AppState>,
    Json(payload): Json<UpdateManagersRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .projects
        .remove_manager_from_project(&payload.project_id, &payload.manager_id)
        .await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/project/programmers/add
/// Body: { "projectId": "...", "programmerId": "..." }
async fn add_programmer(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProgrammersRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .projects
        .add_programmer_to_project(&payload.project_id, &payload.programmer_id)
        .await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/project/programmers/remove
async fn remove_programmer(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProgrammersRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .projects
        .remove_programmer_from_project(&payload.project_id, &payload.programmer_id)
        .await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/project/name
/// Body: { "projectId": "...", "newName": "shop" }
async fn change_name(
    State(state): State<AppState>,
    Json(payload): Json<ChangeProjectNameRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .projects
        .change_name(&payload.project_id, &payload.new_name)
        .await?;
    Ok(StatusCode::OK)
}
