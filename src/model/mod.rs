/// Domain model
///
/// Entity records for managers, programmers and projects, plus the
/// classification enums carried by programmers.

pub mod types;

pub use types::{EntityKind, Manager, Programmer, ProgrammerType, Project, SkillLevel};
