/// Programmer records

use crate::model::{Programmer, ProgrammerType, SkillLevel};
use crate::store::PROGRAMMER_PROJECTS;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

/// Load a programmer with its projects
pub async fn find_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Programmer>, sqlx::Error> {
    let row = sqlx::query("SELECT name, skill_level, programmer_type FROM programmers WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let skill_level: String = row.try_get("skill_level")?;
    let programmer_type: String = row.try_get("programmer_type")?;
    let projects = PROGRAMMER_PROJECTS.projects_of(conn, id).await?;

    Ok(Some(Programmer {
        id,
        name: row.try_get("name")?,
        skill_level: skill_level
            .parse::<SkillLevel>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        programmer_type: programmer_type
            .parse::<ProgrammerType>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        projects,
    }))
}

/// Whether a programmer record exists
pub async fn exists(conn: &mut SqliteConnection, id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM programmers WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.is_some())
}

/// Insert or update the programmer's own fields
pub async fn save(
    conn: &mut SqliteConnection,
    id: Uuid,
    name: &str,
    skill_level: SkillLevel,
    programmer_type: ProgrammerType,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO programmers (id, name, skill_level, programmer_type) VALUES (?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            skill_level = excluded.skill_level,
            programmer_type = excluded.programmer_type
        "#,
    )
    .bind(id.to_string())
    .bind(name)
    .bind(skill_level.as_str())
    .bind(programmer_type.as_str())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Erase a programmer record; links must already be gone
pub async fn delete_by_id(conn: &mut SqliteConnection, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM programmers WHERE id = ?")
        .bind(id.to_string())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
