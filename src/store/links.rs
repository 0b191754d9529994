/// Relation index between owners (managers, programmers) and projects
///
/// Each link table stores one row per (owner, project) pair. The forward view
/// (an owner's projects) and the reverse view (a project's owners) are two
/// queries over the same rows, so they cannot drift apart.

use crate::model::Project;
use crate::store::decode_id;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

/// A many-to-many link table with projects on the target side
#[derive(Debug, Clone, Copy)]
pub struct LinkTable {
    /// Link table name
    table: &'static str,
    /// Column holding the owner id
    owner_column: &'static str,
    /// Table the owner id refers to
    owner_table: &'static str,
}

/// Manager -> project links
pub const MANAGER_PROJECTS: LinkTable = LinkTable {
    table: "manager_projects",
    owner_column: "manager_id",
    owner_table: "managers",
};

/// Programmer -> project links
pub const PROGRAMMER_PROJECTS: LinkTable = LinkTable {
    table: "programmer_projects",
    owner_column: "programmer_id",
    owner_table: "programmers",
};

impl LinkTable {
    /// Link owner and project; returns false if they were already linked
    pub async fn attach(
        &self,
        conn: &mut SqliteConnection,
        owner: Uuid,
        project: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}, project_id) VALUES (?, ?)",
            self.table, self.owner_column
        );
        let result = sqlx::query(&sql)
            .bind(owner.to_string())
            .bind(project.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unlink owner and project; returns false if they were not linked
    pub async fn detach(
        &self,
        conn: &mut SqliteConnection,
        owner: Uuid,
        project: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND project_id = ?",
            self.table, self.owner_column
        );
        let result = sqlx::query(&sql)
            .bind(owner.to_string())
            .bind(project.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Forward view: projects linked to an owner, ordered by name
    pub async fn projects_of(
        &self,
        conn: &mut SqliteConnection,
        owner: Uuid,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT p.id, p.name
            FROM {table} l
            JOIN projects p ON p.id = l.project_id
            WHERE l.{owner} = ?
            ORDER BY p.name, p.id
            "#,
            table = self.table,
            owner = self.owner_column,
        );
        let rows = sqlx::query(&sql)
            .bind(owner.to_string())
            .fetch_all(&mut *conn)
            .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            projects.push(Project {
                id: decode_id(&row, "id")?,
                project_name: row.try_get("name")?,
            });
        }

        Ok(projects)
    }

    /// Reverse view: ids of owners linked to a project, ordered by owner name
    pub async fn owners_of(
        &self,
        conn: &mut SqliteConnection,
        project: Uuid,
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT l.{owner} AS owner_id
            FROM {table} l
            JOIN {owners} o ON o.id = l.{owner}
            WHERE l.project_id = ?
            ORDER BY o.name, o.id
            "#,
            table = self.table,
            owner = self.owner_column,
            owners = self.owner_table,
        );
        let rows = sqlx::query(&sql)
            .bind(project.to_string())
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(|row| decode_id(row, "owner_id")).collect()
    }

    /// Drop every link of an owner, returning how many were removed
    pub async fn detach_owner(
        &self,
        conn: &mut SqliteConnection,
        owner: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", self.table, self.owner_column);
        let result = sqlx::query(&sql)
            .bind(owner.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Drop every link of a project, returning how many were removed
    pub async fn detach_project(
        &self,
        conn: &mut SqliteConnection,
        project: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE project_id = ?", self.table);
        let result = sqlx::query(&sql)
            .bind(project.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{managers, projects, Database};

    async fn seeded() -> (Database, Uuid, Uuid, Uuid) {
        let database = Database::in_memory().await.unwrap();
        let mut conn = database.pool().acquire().await.unwrap();

        let manager = Uuid::new_v4();
        managers::save(&mut conn, manager, "Alex").await.unwrap();
        let first = Uuid::new_v4();
        projects::save(&mut conn, first, "alpha").await.unwrap();
        let second = Uuid::new_v4();
        projects::save(&mut conn, second, "beta").await.unwrap();
        drop(conn);

        (database, manager, first, second)
    }

    #[tokio::test]
    async fn attach_is_visible_from_both_sides() {
        let (database, manager, alpha, _) = seeded().await;
        let mut conn = database.pool().acquire().await.unwrap();

        assert!(MANAGER_PROJECTS.attach(&mut conn, manager, alpha).await.unwrap());

        let forward = MANAGER_PROJECTS.projects_of(&mut conn, manager).await.unwrap();
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].id, alpha);

        let reverse = MANAGER_PROJECTS.owners_of(&mut conn, alpha).await.unwrap();
        assert_eq!(reverse, vec![manager]);
    }

    #[tokio::test]
    async fn attach_twice_keeps_one_link() {
        let (database, manager, alpha, _) = seeded().await;
        let mut conn = database.pool().acquire().await.unwrap();

        assert!(MANAGER_PROJECTS.attach(&mut conn, manager, alpha).await.unwrap());
        assert!(!MANAGER_PROJECTS.attach(&mut conn, manager, alpha).await.unwrap());

        let forward = MANAGER_PROJECTS.projects_of(&mut conn, manager).await.unwrap();
        assert_eq!(forward.len(), 1);
    }

    #[tokio::test]
    async fn detach_missing_link_is_noop() {
        let (database, manager, alpha, _) = seeded().await;
        let mut conn = database.pool().acquire().await.unwrap();

        assert!(!MANAGER_PROJECTS.detach(&mut conn, manager, alpha).await.unwrap());
    }

    #[tokio::test]
    async fn forward_view_is_ordered_by_project_name() {
        let (database, manager, alpha, beta) = seeded().await;
        let mut conn = database.pool().acquire().await.unwrap();

        MANAGER_PROJECTS.attach(&mut conn, manager, beta).await.unwrap();
        MANAGER_PROJECTS.attach(&mut conn, manager, alpha).await.unwrap();

        let names: Vec<String> = MANAGER_PROJECTS
            .projects_of(&mut conn, manager)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.project_name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn bulk_detach_by_owner_and_by_project() {
        let (database, manager, alpha, beta) = seeded().await;
        let mut conn = database.pool().acquire().await.unwrap();

        MANAGER_PROJECTS.attach(&mut conn, manager, alpha).await.unwrap();
        MANAGER_PROJECTS.attach(&mut conn, manager, beta).await.unwrap();

        assert_eq!(MANAGER_PROJECTS.detach_project(&mut conn, alpha).await.unwrap(), 1);
        assert_eq!(MANAGER_PROJECTS.detach_owner(&mut conn, manager).await.unwrap(), 1);
        assert!(MANAGER_PROJECTS.owners_of(&mut conn, beta).await.unwrap().is_empty());
    }
}
