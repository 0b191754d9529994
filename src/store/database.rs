/// SQLite connection management and schema
///
/// One database file holds the three entity tables and the two link tables.
/// Link rows reference both endpoints without cascading, so an entity can
/// only be erased once its links have been cleaned up.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// SQLite allows a single writer; one pooled connection serializes record writes
const MAX_CONNECTIONS: u32 = 1;

/// Shared handle to the staffing database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database file and initialize its schema
    pub async fn open(path: &Path) -> Result<Self> {
        tracing::info!("🗄️ Opening staffing database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.init_schema().await?;

        tracing::info!("✅ Staffing database ready: {}", path.display());
        Ok(database)
    }

    /// Private in-memory database, used by tests
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        // The database lives only as long as its connection, so never recycle it
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.init_schema().await?;
        Ok(database)
    }

    /// Connection pool for store operations
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create entity and link tables
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS managers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS programmers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                skill_level TEXT NOT NULL,
                programmer_type TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // One row per pair: the composite key gives set semantics in both directions
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS manager_projects (
                manager_id TEXT NOT NULL REFERENCES managers(id),
                project_id TEXT NOT NULL REFERENCES projects(id),
                PRIMARY KEY (manager_id, project_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS programmer_projects (
                programmer_id TEXT NOT NULL REFERENCES programmers(id),
                project_id TEXT NOT NULL REFERENCES projects(id),
                PRIMARY KEY (programmer_id, project_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Reverse lookups go by project
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_manager_projects_project ON manager_projects(project_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_programmer_projects_project ON programmer_projects(project_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn schema_creates_all_tables() {
        let database = Database::in_memory().await.unwrap();

        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(database.pool())
            .await
            .unwrap();
        let tables: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        assert_eq!(
            tables,
            vec![
                "manager_projects",
                "managers",
                "programmer_projects",
                "programmers",
                "projects",
            ]
        );
    }

    #[tokio::test]
    async fn link_rows_require_existing_endpoints() {
        let database = Database::in_memory().await.unwrap();

        let result = sqlx::query("INSERT INTO manager_projects (manager_id, project_id) VALUES ('a', 'b')")
            .execute(database.pool())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn open_creates_file_database() {
        let dir = std::env::temp_dir().join(format!("staffing-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("staffing.db");

        let database = Database::open(&path).await.unwrap();
        database.init_schema().await.unwrap();
        assert!(path.exists());

        database.pool().close().await;
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
