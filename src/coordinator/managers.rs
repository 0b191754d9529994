/// Manager coordinator
///
/// Owns manager records and the manager side of manager/project links.

use crate::coordinator::resolve::{parse_id, require_manager, require_manager_exists, require_project};
use crate::error::Result;
use crate::model::{Manager, Project};
use crate::store::{managers, Database, MANAGER_PROJECTS};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ManagerCoordinator {
    db: Database,
}

impl ManagerCoordinator {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Load a manager with its projects
    pub async fn get_by_id(&self, id: &str) -> Result<Manager> {
        let id = parse_id(id)?;
        let mut conn = self.db.pool().acquire().await?;
        require_manager(&mut conn, id).await
    }

    /// Projects the manager is attached to
    pub async fn get_projects(&self, id: &str) -> Result<Vec<Project>> {
        Ok(self.get_by_id(id).await?.projects)
    }

    /// Create a manager with no projects and return its new id
    pub async fn create(&self, name: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut conn = self.db.pool().acquire().await?;
        managers::save(&mut conn, id, name).await?;

        tracing::info!("Created manager with id: {}", id);
        Ok(id)
    }

    /// Detach the manager from every project, then erase it
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        require_manager_exists(&mut tx, id).await?;

        let unlinked = MANAGER_PROJECTS.detach_owner(&mut tx, id).await?;
        managers::delete_by_id(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted manager with id: {} ({} project links removed)", id, unlinked);
        Ok(())
    }

    /// Attach a project to a manager; attaching twice is a no-op
    pub async fn add_project(&self, manager_id: &str, project_id: &str) -> Result<()> {
        let manager_id = parse_id(manager_id)?;
        let project_id = parse_id(project_id)?;

        let mut tx = self.db.pool().begin().await?;
        require_manager_exists(&mut tx, manager_id).await?;
        require_project(&mut tx, project_id).await?;

        let added = MANAGER_PROJECTS.attach(&mut tx, manager_id, project_id).await?;
        tx.commit().await?;

        if added {
            tracing::info!("Added project: {} to manager: {}", project_id, manager_id);
        } else {
            tracing::debug!("Project: {} already attached to manager: {}", project_id, manager_id);
        }
        Ok(())
    }

    /// Detach a project from a manager; detaching an unlinked pair is a no-op
    pub async fn remove_project(&self, manager_id: &str, project_id: &str) -> Result<()> {
        let manager_id = parse_id(manager_id)?;
        let project_id = parse_id(project_id)?;

        let mut tx = self.db.pool().begin().await?;
        require_manager_exists(&mut tx, manager_id).await?;
        require_project(&mut tx, project_id).await?;

        MANAGER_PROJECTS.detach(&mut tx, manager_id, project_id).await?;
        tx.commit().await?;

        tracing::info!("Removed project: {} from manager: {}", project_id, manager_id);
        Ok(())
    }

    pub async fn change_name(&self, id: &str, new_name: &str) -> Result<()> {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        require_manager_exists(&mut tx, id).await?;

        managers::save(&mut tx, id, new_name).await?;
        tx.commit().await?;

        tracing::info!("New name: {} of manager: {}", new_name, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffError;
    use crate::model::EntityKind;
    use crate::store::projects;

    async fn setup() -> (ManagerCoordinator, Database) {
        let db = Database::in_memory().await.unwrap();
        (ManagerCoordinator::new(db.clone()), db)
    }

    async fn new_project(db: &Database, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        let mut conn = db.pool().acquire().await.unwrap();
        projects::save(&mut conn, id, name).await.unwrap();
        id
    }

    async fn managers_of(db: &Database, project: Uuid) -> Vec<Uuid> {
        let mut conn = db.pool().acquire().await.unwrap();
        MANAGER_PROJECTS.owners_of(&mut conn, project).await.unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let (managers, _) = setup().await;

        let id = managers.create("Alex").await.unwrap();
        let manager = managers.get_by_id(&id.to_string()).await.unwrap();

        assert_eq!(manager.id, id);
        assert_eq!(manager.name, "Alex");
        assert!(manager.projects.is_empty());
    }

    #[tokio::test]
    async fn create_never_reuses_ids() {
        let (managers, _) = setup().await;

        let first = managers.create("Alex").await.unwrap();
        managers.delete_by_id(&first.to_string()).await.unwrap();
        let second = managers.create("Alex").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (managers, _) = setup().await;
        let id = Uuid::new_v4();

        let err = managers.get_by_id(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, StaffError::NotFound { kind: EntityKind::Manager, id: missing } if missing == id));

        let err = managers.get_projects(&id.to_string()).await.unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_id_wins_over_missing_record() {
        let (managers, _) = setup().await;

        let err = managers.get_by_id("42").await.unwrap_err();
        assert!(matches!(err, StaffError::InvalidIdentifier(_)));

        // Unknown manager plus malformed project id still reports the malformed one
        let err = managers
            .add_project(&Uuid::new_v4().to_string(), "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, StaffError::InvalidIdentifier(ref raw) if raw == "nope"));
    }

    #[tokio::test]
    async fn add_project_is_symmetric() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;

        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();

        let forward = managers.get_projects(&manager.to_string()).await.unwrap();
        assert_eq!(forward.iter().map(|p| p.id).collect::<Vec<_>>(), vec![project]);
        assert_eq!(managers_of(&db, project).await, vec![manager]);
    }

    #[tokio::test]
    async fn add_project_twice_is_idempotent() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;

        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();
        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();

        assert_eq!(managers.get_projects(&manager.to_string()).await.unwrap().len(), 1);
        assert_eq!(managers_of(&db, project).await.len(), 1);
    }

    #[tokio::test]
    async fn add_project_checks_both_ends() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;

        let missing = Uuid::new_v4();
        let err = managers
            .add_project(&manager.to_string(), &missing.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StaffError::NotFound { kind: EntityKind::Project, .. }));

        let err = managers
            .add_project(&missing.to_string(), &project.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StaffError::NotFound { kind: EntityKind::Manager, .. }));

        assert!(managers_of(&db, project).await.is_empty());
    }

    #[tokio::test]
    async fn remove_project_clears_both_sides() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;
        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();

        managers.remove_project(&manager.to_string(), &project.to_string()).await.unwrap();

        assert!(managers.get_projects(&manager.to_string()).await.unwrap().is_empty());
        assert!(managers_of(&db, project).await.is_empty());

        // Removing again is harmless
        managers.remove_project(&manager.to_string(), &project.to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn delete_cleans_reverse_links() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let other = managers.create("Olena").await.unwrap();
        let first = new_project(&db, "alpha").await;
        let second = new_project(&db, "beta").await;
        for project in [first, second] {
            managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();
        }
        managers.add_project(&other.to_string(), &first.to_string()).await.unwrap();

        managers.delete_by_id(&manager.to_string()).await.unwrap();

        assert_eq!(managers_of(&db, first).await, vec![other]);
        assert!(managers_of(&db, second).await.is_empty());
        let err = managers.get_by_id(&manager.to_string()).await.unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
    }

    #[tokio::test]
    async fn failed_erase_keeps_project_links() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;
        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();

        sqlx::query(
            r#"
            CREATE TRIGGER refuse_manager_delete BEFORE DELETE ON managers
            BEGIN
                SELECT RAISE(ABORT, 'manager delete refused');
            END
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let err = managers.delete_by_id(&manager.to_string()).await.unwrap_err();
        assert!(matches!(err, StaffError::Database(_)));

        // Link cleanup ran before the erase failed; the rollback must restore it
        assert_eq!(managers_of(&db, project).await, vec![manager]);
        let loaded = managers.get_by_id(&manager.to_string()).await.unwrap();
        assert_eq!(loaded.projects.len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_manager_fails() {
        let (managers, _) = setup().await;

        let err = managers.delete_by_id(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, StaffError::NotFound { kind: EntityKind::Manager, .. }));
    }

    #[tokio::test]
    async fn change_name_keeps_links() {
        let (managers, db) = setup().await;
        let manager = managers.create("Alex").await.unwrap();
        let project = new_project(&db, "ukrposhta").await;
        managers.add_project(&manager.to_string(), &project.to_string()).await.unwrap();

        managers.change_name(&manager.to_string(), "Oleksandr").await.unwrap();

        let loaded = managers.get_by_id(&manager.to_string()).await.unwrap();
        assert_eq!(loaded.name, "Oleksandr");
        assert_eq!(loaded.projects.len(), 1);
    }

    #[tokio::test]
    async fn change_name_of_unknown_manager_fails() {
        let (managers, _) = setup().await;

        let err = managers
            .change_name(&Uuid::new_v4().to_string(), "Nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, StaffError::NotFound { .. }));
    }
}
