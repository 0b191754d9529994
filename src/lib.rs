/// Staffing: managers, programmers and the projects they share
///
/// Tracks three entity kinds and the many-to-many links between them,
/// keeping both sides of every link consistent across adds, removals and
/// deletions.

// Core configuration and setup
pub mod config;

// Entity records and classification enums
pub mod model;

// Coordinator error type and its HTTP mapping
pub mod error;

// SQLite persistence: entity stores and link tables
pub mod store;

// CRUD and link maintenance per entity kind
pub mod coordinator;

// HTTP API layer - REST endpoints under /api/v1
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use coordinator::{ManagerCoordinator, ProgrammerCoordinator, ProjectCoordinator};
pub use error::{Result, StaffError};
pub use model::{EntityKind, Manager, Programmer, ProgrammerType, Project, SkillLevel};
pub use server::{build_router, start_server};
pub use store::Database;
