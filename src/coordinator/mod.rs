/// Coordinators: CRUD and link maintenance per entity kind
///
/// Managers and programmers own the forward side of their project links and
/// are the only components that write link rows. The project coordinator
/// reads the reverse views itself but forwards every link mutation to the
/// owning coordinator, passing identifiers only.

pub mod managers;
pub mod programmers;
pub mod projects;
mod resolve;

pub use managers::ManagerCoordinator;
pub use programmers::ProgrammerCoordinator;
pub use projects::ProjectCoordinator;
