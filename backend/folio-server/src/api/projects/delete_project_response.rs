use crate::ProjectDto;

use serde::Serialize;

pub const DELETED_MESSAGE: &str = "Project deleted successfully";

#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub message: String,
    pub project: ProjectDto,
}

impl DeleteProjectResponse {
    pub fn new(project: ProjectDto) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            project,
        }
    }
}
