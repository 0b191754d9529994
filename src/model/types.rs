/// Entity type definitions
///
/// Managers and programmers own the forward side of their project links.
/// A project only exposes the reverse views, which are read from the link
/// tables and never embedded in the project record itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The three entity kinds tracked by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Manager,
    Programmer,
    Project,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Manager => "manager",
            EntityKind::Programmer => "programmer",
            EntityKind::Project => "project",
        };
        f.write_str(name)
    }
}

/// A project record as seen from either side of a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
}

/// A manager together with the projects it is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: Uuid,
    pub name: String,
    /// Forward link, ordered by project name
    pub projects: Vec<Project>,
}

/// A programmer with both classification attributes and its projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Programmer {
    pub id: Uuid,
    pub name: String,
    pub skill_level: SkillLevel,
    #[serde(rename = "type")]
    pub programmer_type: ProgrammerType,
    /// Forward link, ordered by project name
    pub projects: Vec<Project>,
}

/// Seniority of a programmer, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillLevel {
    Junior,
    Middle,
    Senior,
}

/// Role a programmer plays on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgrammerType {
    Developer,
    Qa,
}

/// Error returned when a stored classification name is not recognised
#[derive(Debug, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownVariant {
    field: &'static str,
    value: String,
}

impl SkillLevel {
    /// Upper-case name used for storage and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Junior => "JUNIOR",
            SkillLevel::Middle => "MIDDLE",
            SkillLevel::Senior => "SENIOR",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JUNIOR" => Ok(SkillLevel::Junior),
            "MIDDLE" => Ok(SkillLevel::Middle),
            "SENIOR" => Ok(SkillLevel::Senior),
            other => Err(UnknownVariant {
                field: "skill level",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProgrammerType {
    /// Upper-case name used for storage and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgrammerType::Developer => "DEVELOPER",
            ProgrammerType::Qa => "QA",
        }
    }
}

impl FromStr for ProgrammerType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEVELOPER" => Ok(ProgrammerType::Developer),
            "QA" => Ok(ProgrammerType::Qa),
            other => Err(UnknownVariant {
                field: "programmer type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProgrammerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skill_levels_are_ordered() {
        assert!(SkillLevel::Junior < SkillLevel::Middle);
        assert!(SkillLevel::Middle < SkillLevel::Senior);
    }

    #[test]
    fn storage_names_parse_back() {
        for level in [SkillLevel::Junior, SkillLevel::Middle, SkillLevel::Senior] {
            assert_eq!(level.as_str().parse::<SkillLevel>().unwrap(), level);
        }
        assert_eq!("QA".parse::<ProgrammerType>().unwrap(), ProgrammerType::Qa);
        assert!("ARCHITECT".parse::<ProgrammerType>().is_err());
        assert!("senior".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn programmer_serializes_with_source_field_names() {
        let id = Uuid::new_v4();
        let programmer = Programmer {
            id,
            name: "Antony".to_string(),
            skill_level: SkillLevel::Middle,
            programmer_type: ProgrammerType::Developer,
            projects: vec![],
        };

        let value = serde_json::to_value(&programmer).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "name": "Antony",
                "skillLevel": "MIDDLE",
                "type": "DEVELOPER",
                "projects": []
            })
        );
    }

    #[test]
    fn project_uses_project_name_key() {
        let id = Uuid::new_v4();
        let project = Project { id, project_name: "ukrposhta".to_string() };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["projectName"], "ukrposhta");
    }
}
