/// HTTP API Layer
///
/// REST endpoints under /api/v1 for managers, programmers and projects.
/// Each handler maps 1:1 onto a coordinator operation; coordinator errors
/// turn into responses through `StaffError`'s `IntoResponse`.

use crate::coordinator::{ManagerCoordinator, ProgrammerCoordinator, ProjectCoordinator};
use serde::Deserialize;

// Manager CRUD and project links
pub mod managers;

// Programmer CRUD, classifications and project links
pub mod programmers;

// Project CRUD, reverse views and link forwarding
pub mod projects;

// Re-export router builders
pub use managers::create_manager_routes;
pub use programmers::create_programmer_routes;
pub use projects::create_project_routes;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub managers: ManagerCoordinator,
    pub programmers: ProgrammerCoordinator,
    pub projects: ProjectCoordinator,
}

/// Request body for attaching or detaching a project on the owner side
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectsRequest {
    /// Owner id (manager or programmer)
    pub id: String,
    pub project_id: String,
}

/// Request body for renaming a manager or programmer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNameRequest {
    pub id: String,
    pub new_name: String,
}
