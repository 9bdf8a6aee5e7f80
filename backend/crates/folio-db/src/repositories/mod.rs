pub mod memory_project_store;
pub mod project_repository;
