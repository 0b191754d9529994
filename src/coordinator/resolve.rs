/// Identifier resolution shared by all coordinators
///
/// Callers parse every identifier with [`parse_id`] before the first lookup,
/// so a malformed id always wins over an unknown one.

use crate::error::{Result, StaffError};
use crate::model::{EntityKind, Manager, Programmer, Project};
use crate::store::{managers, programmers, projects};
use sqlx::SqliteConnection;
use uuid::Uuid;

pub(crate) use crate::error::parse_id;

fn not_found(kind: EntityKind, id: Uuid) -> StaffError {
    tracing::debug!("No {} with id: {}", kind, id);
    StaffError::NotFound { kind, id }
}

pub(crate) async fn require_manager(conn: &mut SqliteConnection, id: Uuid) -> Result<Manager> {
    managers::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Manager, id))
}

pub(crate) async fn require_programmer(conn: &mut SqliteConnection, id: Uuid) -> Result<Programmer> {
    programmers::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Programmer, id))
}

pub(crate) async fn require_project(conn: &mut SqliteConnection, id: Uuid) -> Result<Project> {
    projects::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Project, id))
}

/// Cheaper existence check for link endpoints that are not returned
pub(crate) async fn require_manager_exists(conn: &mut SqliteConnection, id: Uuid) -> Result<()> {
    if managers::exists(conn, id).await? {
        Ok(())
    } else {
        Err(not_found(EntityKind::Manager, id))
    }
}

pub(crate) async fn require_programmer_exists(conn: &mut SqliteConnection, id: Uuid) -> Result<()> {
    if programmers::exists(conn, id).await? {
        Ok(())
    } else {
        Err(not_found(EntityKind::Programmer, id))
    }
}
