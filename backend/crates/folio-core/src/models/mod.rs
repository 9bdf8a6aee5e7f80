pub mod new_project;
pub mod project;
pub mod project_changes;
pub mod project_query;
pub mod required_field;
pub mod text;
pub mod timestamp;
