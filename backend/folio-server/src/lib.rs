pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        delete_project_response::DeleteProjectResponse,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, get_projects, update_project},
        projects_query::ProjectsQuery,
        update_project_request::UpdateProjectRequest,
    },
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::AppState;
