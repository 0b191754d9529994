/// Programmer REST endpoints

use crate::{
    api::{AppState, ChangeNameRequest, UpdateProjectsRequest},
    error::StaffError,
    model::{Programmer, ProgrammerType, Project, SkillLevel},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

/// Request body for programmer creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgrammerRequest {
    pub name: String,
    pub skill_level: SkillLevel,
    pub programmer_type: ProgrammerType,
}

/// Request body for a skill level change
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSkillLevelRequest {
    pub programmer_id: String,
    pub skill_level: SkillLevel,
}

/// Request body for a programmer type change
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTypeRequest {
    pub programmer_id: String,
    #[serde(rename = "type")]
    pub programmer_type: ProgrammerType,
}

pub fn create_programmer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/programmer/new", post(create_programmer))
        .route("/api/v1/programmer/name", post(change_name))
        .route("/api/v1/programmer/skill", post(change_skill_level))
        .route("/api/v1/programmer/type", post(change_programmer_type))
        .route("/api/v1/programmer/projects/add", post(add_project))
        .route("/api/v1/programmer/projects/remove", post(remove_project))
        .route("/api/v1/programmer/projects/{programmer_id}", get(get_projects))
        .route(
            "/api/v1/programmer/{programmer_id}",
            get(get_programmer).delete(delete_programmer),
        )
}

/// GET /api/v1/programmer/{programmerId}
async fn get_programmer(
    State(state): State<AppState>,
    Path(programmer_id): Path<String>,
) -> Result<Json<Programmer>, StaffError> {
    Ok(Json(state.programmers.get_by_id(&programmer_id).await?))
}

/// GET /api/v1/programmer/projects/{programmerId}
async fn get_projects(
    State(state): State<AppState>,
    Path(programmer_id): Path<String>,
) -> Result<Json<Vec<Project>>, StaffError> {
    Ok(Json(state.programmers.get_projects(&programmer_id).await?))
}

/// POST /api/v1/programmer/new
/// Body: { "name": "Antony", "skillLevel": "MIDDLE", "programmerType": "DEVELOPER" }
async fn create_programmer(
    State(state): State<AppState>,
    Json(payload): Json<CreateProgrammerRequest>,
) -> Result<(StatusCode, Json<String>), StaffError> {
    let id = state
        .programmers
        .create(&payload.name, payload.skill_level, payload.programmer_type)
        .await?;
    Ok((StatusCode::CREATED, Json(id.to_string())))
}

/// DELETE /api/v1/programmer/{programmerId}
async fn delete_programmer(
    State(state): State<AppState>,
    Path(programmer_id): Path<String>,
) -> Result<StatusCode, StaffError> {
    state.programmers.delete_by_id(&programmer_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/programmer/projects/add
/// Body: { "id": "<programmerId>", "projectId": "..." }
async fn add_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProjectsRequest>,
) -> Result<StatusCode, StaffError> {
    state.programmers.add_project(&payload.id, &payload.project_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/programmer/projects/remove
async fn remove_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProjectsRequest>,
) -> Result<StatusCode, StaffError> {
    state.programmers.remove_project(&payload.id, &payload.project_id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/programmer/name
async fn change_name(
    State(state): State<AppState>,
    Json(payload): Json<ChangeNameRequest>,
) -> Result<StatusCode, StaffError> {
    state.programmers.change_name(&payload.id, &payload.new_name).await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/programmer/skill
/// Body: { "programmerId": "...", "skillLevel": "SENIOR" }
async fn change_skill_level(
    State(state): State<AppState>,
    Json(payload): Json<ChangeSkillLevelRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .programmers
        .change_skill_level(&payload.programmer_id, payload.skill_level)
        .await?;
    Ok(StatusCode::OK)
}

/// POST /api/v1/programmer/type
/// Body: { "programmerId": "...", "type": "QA" }
async fn change_programmer_type(
    State(state): State<AppState>,
    Json(payload): Json<ChangeTypeRequest>,
) -> Result<StatusCode, StaffError> {
    state
        .programmers
        .change_programmer_type(&payload.programmer_id, payload.programmer_type)
        .await?;
    Ok(StatusCode::OK)
}
