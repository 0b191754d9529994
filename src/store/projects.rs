/// Project records
///
/// A project row carries only its name. Its managers and programmers are
/// read through the link tables.

use crate::model::Project;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

/// Load a project
pub async fn find_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query("SELECT name FROM projects WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => Ok(Some(Project {
            id,
            project_name: row.try_get("name")?,
        })),
        None => Ok(None),
    }
}

/// Insert or update the project's name
pub async fn save(conn: &mut SqliteConnection, id: Uuid, project_name: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO projects (id, name) VALUES (?, ?)
        ON CONFLICT(id) DO UPDATE SET name = excluded.name
        "#,
    )
    .bind(id.to_string())
    .bind(project_name)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Erase a project record; links must already be gone
pub async fn delete_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id.to_string())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
