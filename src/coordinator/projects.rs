/// Project coordinator
///
/// Reads the reverse views of both link kinds. Link mutations are forwarded
/// to the manager and programmer coordinators with the arguments reordered;
/// this coordinator only writes link rows when a project is deleted.

use crate::coordinator::resolve::{parse_id, require_project};
use crate::coordinator::{ManagerCoordinator, ProgrammerCoordinator};
use crate::error::Result;
use crate::model::{Manager, Programmer, Project};
use crate::store::{managers, programmers, projects, Database, MANAGER_PROJECTS, PROGRAMMER_PROJECTS};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProjectCoordinator {
    db: Database,
    managers: ManagerCoordinator,
    programmers: ProgrammerCoordinator,
}

impl ProjectCoordinator {
    pub fn new(db: Database, managers: ManagerCoordinator, programmers: ProgrammerCoordinator) -> Self {
        Self {
            db,
            managers,
            programmers,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Project> {
        let id = parse_id(id)?;
        let mut conn = self.db.pool().acquire().await?;
        require_project(&mut conn, id).await
    }

    /// Managers attached to the project, ordered by name
    pub async fn get_managers(&self, id: &str) -> Result<Vec<Manager>> {
        let id = parse_id(id)?;
        let mut conn = self.db.pool().acquire().await?;
        require_project(&mut conn, id).await?;

        let mut linked = Vec::new();
        for manager_id in MANAGER_PROJECTS.owners_of(&mut conn, id).await? {
            if let Some(manager) = managers::find_by_id(&mut conn, manager_id).await? {
                linked.push(manager);
            }
        }

        Ok(linked)
    }

    /// Programmers attached to the project, ordered by name
    pub async fn get_programmers(&self, id: &str) -> Result<Vec<Programmer>> {
        let id = parse_id(id)?;
        let mut conn = self.db.pool().acquire().await?;
        require_project(&mut conn, id).await?;

        let mut linked = Vec::new();
        for programmer_id in PROGRAMMER_PROJECTS.owners_of(&mut conn, id).await? {
            if let Some(programmer) = programmers::find_by_id(&mut conn, programmer_id).await? {
                linked.push(programmer);
            }
        }

        Ok(linked)
    }

    /// Create a project with no managers or programmers and return its new id
    pub async fn create(&self, project_name: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut conn = self.db.pool().acquire().await?;
        projects::save(&mut conn, id, project_name).await?;

        tracing::info!("Created project with id: {}", id);
        Ok(id)
    }

    /// Detach the project from every manager and programmer, then erase it
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        require_project(&mut tx, id).await?;

        let programmer_links = PROGRAMMER_PROJECTS.detach_project(&mut tx, id).await?;
        let manager_links = MANAGER_PROJECTS.detach_project(&mut tx, id).await?;
        projects::delete_by_id(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(
            "Deleted project with id: {} ({} manager links, {} programmer links removed)",
            id,
            manager_links,
            programmer_links
        );
        Ok(())
    }

    pub async fn add_manager_to_project(&self, project_id: &str, manager_id: &str) -> Result<()> {
        self.managers.add_project(manager_id, project_id).await
    }

    pub async fn remove_manager_from_project(&self, project_id: &str, manager_id: &str) -> Result<()> {
        self.managers.remove_project(manager_id, project_id).await
    }

    pub async fn add_programmer_to_project(&self, project_id: &str, programmer_id: &str) -> Result<()> {
        self.programmers.add_project(programmer_id, project_id).await
    }

    pub async fn remove_programmer_from_project(&self, project_id: &str, programmer_id: &str) -> Result<()> {
        self.programmers.remove_project(programmer_id, project_id).await
    }

    pub async fn change_name(&self, id: &str, new_name: &str) -> Result<()> {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        require_project(&mut tx, id).await?;

        projects::save(&mut tx, id, new_name).await?;
        tx.commit().await?;

        tracing::info!("New name: {} of project: {}", new_name, id);
        Ok(())
    }
}
