/// Manager records

use crate::model::Manager;
use crate::store::MANAGER_PROJECTS;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

/// Load a manager with its projects
pub async fn find_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Manager>, sqlx::Error> {
    let row = sqlx::query("SELECT name FROM managers WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let projects = MANAGER_PROJECTS.projects_of(conn, id).await?;
    Ok(Some(Manager {
        id,
        name: row.try_get("name")?,
        projects,
    }))
}

/// Whether a manager record exists
pub async fn exists(conn: &mut SqliteConnection, id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM managers WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.is_some())
}

/// Insert or update the manager's own fields
pub async fn save(conn: &mut SqliteConnection, id: Uuid, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO managers (id, name) VALUES (?, ?)
        ON CONFLICT(id) DO UPDATE SET name = excluded.name
        "#,
    )
    .bind(id.to_string())
    .bind(name)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Erase a manager record; links must already be gone
pub async fn delete_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM managers WHERE id = ?")
        .bind(id.to_string())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
