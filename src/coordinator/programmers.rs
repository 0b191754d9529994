/// Programmer coordinator
///
/// Owns programmer records, their two classification attributes, and the
/// programmer side of programmer/project links.

use crate::coordinator::resolve::{
    parse_id, require_programmer, require_programmer_exists, require_project,
};
use crate::error::Result;
use crate::model::{Programmer, ProgrammerType, Project, SkillLevel};
use crate::store::{programmers, Database, PROGRAMMER_PROJECTS};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProgrammerCoordinator {
    db: Database,
}

impl ProgrammerCoordinator {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Load a programmer with its projects
    pub async fn get_by_id(&self, id: &str) -> Result<Programmer> {
        let id = parse_id(id)?;
        let mut conn = self.db.pool().acquire().await?;
        require_programmer(&mut conn, id).await
    }

    /// Projects the programmer is attached to
    pub async fn get_projects(&self, id: &str) -> Result<Vec<Project>> {
        Ok(self.get_by_id(id).await?.projects)
    }

    /// Create a programmer with no projects and return its new id
    pub async fn create(
        &self,
        name: &str,
        skill_level: SkillLevel,
        programmer_type: ProgrammerType,
    ) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let mut conn = self.db.pool().acquire().await?;
        programmers::save(&mut conn, id, name, skill_level, programmer_type).await?;

        tracing::info!("Created programmer with id: {} ({}, {})", id, skill_level, programmer_type);
        Ok(id)
    }

    /// Detach the programmer from every project, then erase it
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        require_programmer_exists(&mut tx, id).await?;

        let unlinked = PROGRAMMER_PROJECTS.detach_owner(&mut tx, id).await?;
        programmers::delete_by_id(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted programmer with id: {} ({} project links removed)", id, unlinked);
        Ok(())
    }

    /// Attach a project to a programmer; attaching twice is a no-op
    pub async fn add_project(&self, programmer_id: &str, project_id: &str) -> Result<()> {
        let programmer_id = parse_id(programmer_id)?;
        let project_id = parse_id(project_id)?;

        let mut tx = self.db.pool().begin().await?;
        require_programmer_exists(&mut tx, programmer_id).await?;
        require_project(&mut tx, project_id).await?;

        let added = PROGRAMMER_PROJECTS.attach(&mut tx, programmer_id, project_id).await?;
        tx.commit().await?;

        if added {
            tracing::info!("Added project: {} to programmer: {}", project_id, programmer_id);
        } else {
            tracing::debug!("Project: {} already attached to programmer: {}", project_id, programmer_id);
        }
        Ok(())
    }

    /// Detach a project from a programmer; detaching an unlinked pair is a no-op
    pub async fn remove_project(&self, programmer_id: &str, project_id: &str) -> Result<()> {
        let programmer_id = parse_id(programmer_id)?;
        let project_id = parse_id(project_id)?;

        let mut tx = self.db.pool().begin().await?;
        require_programmer_exists(&mut tx, programmer_id).await?;
        require_project(&mut tx, project_id).await?;

        PROGRAMMER_PROJECTS.detach(&mut tx, programmer_id, project_id).await?;
        tx.commit().await?;

        tracing::info!("Removed project: {} from programmer: {}", project_id, programmer_id);
        Ok(())
    }

    pub async fn change_name(&self, id: &str, new_name: &str) -> Result<()> {
        self.update(id, |programmer| programmer.name = new_name.to_string()).await?;
        tracing::info!("New name: {} of programmer: {}", new_name, id);
        Ok(())
    }

    /// Replace the skill level, leaving the type untouched
    pub async fn change_skill_level(&self, id: &str, skill_level: SkillLevel) -> Result<()> {
        self.update(id, |programmer| programmer.skill_level = skill_level).await?;
        tracing::info!("New skill level: {} of programmer: {}", skill_level, id);
        Ok(())
    }

    /// Replace the programmer type, leaving the skill level untouched
    pub async fn change_programmer_type(&self, id: &str, programmer_type: ProgrammerType) -> Result<()> {
        self.update(id, |programmer| programmer.programmer_type = programmer_type).await?;
        tracing::info!("New type: {} of programmer: {}", programmer_type, id);
        Ok(())
    }

    /// Load, modify and store a programmer's own fields in one transaction
    async fn update<F>(&self, id: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Programmer),
    {
        let id = parse_id(id)?;
        let mut tx = self.db.pool().begin().await?;
        let mut programmer = require_programmer(&mut tx, id).await?;

        apply(&mut programmer);

        programmers::save(
            &mut tx,
            programmer.id,
            &programmer.name,
            programmer.skill_level,
            programmer.programmer_type,
        )
        .await?;
        tx.commit().await?;

        Ok(())
    }
}
