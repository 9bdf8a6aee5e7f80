pub mod create_project_request;
pub mod delete_project_response;
pub mod project_dto;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod projects_query;
pub mod update_project_request;
