pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;
pub mod store;


pub use connection::{connect, migrate};
pub use error::{DbError, Result};
pub use repositories::memory_project_store::InMemoryProjectStore;
pub use repositories::project_repository::ProjectRepository;
pub use seed::{sample_projects, seed_if_empty};
pub use store::ProjectStore;
