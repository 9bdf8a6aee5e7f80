//! Project REST API handlers
//!
//! All four methods share `/api/projects`; the target record, when there is
//! one, is named by the `id` query parameter.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, DeleteProjectResponse, ProjectDto,
    ProjectsQuery, UpdateProjectRequest,
};

use folio_core::{Project, ProjectChanges, timestamp};

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects?id=
/// GET /api/projects?limit=&offset=&search=
///
/// A non-blank `id` selects one project; otherwise a page of the list.
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> ApiResult<Response> {
    if let Some(raw_id) = query.non_blank_id() {
        let id = Project::parse_id(raw_id)?;
        let project = find_existing(&state, id).await?;
        return Ok(Json(ProjectDto::from(project)).into_response());
    }

    let list_query = query.to_project_query(state.page_limits);
    let projects = state.store.list(&list_query).await?;

    let dtos: Vec<ProjectDto> = projects.into_iter().map(ProjectDto::from).collect();
    Ok(Json(dtos).into_response())
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(request) = payload?;
    let new_project = request.into_new_project()?;

    let project = state.store.create(&new_project, timestamp::now()).await?;
    info!("Created project {} ({})", project.id, project.title);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /api/projects?id=
///
/// Checked in order: id, existence, body.
pub async fn update_project(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let id = required_id(&query)?;
    let existing = find_existing(&state, id).await?;

    let Json(request) = payload?;
    let changes = ProjectChanges::from(request).normalized()?;

    // Deleted between the lookup and the write.
    let updated = state
        .store
        .update(existing.id, &changes, timestamp::now())
        .await?
        .ok_or_else(ApiError::not_found)?;
    info!("Updated project {} ({})", updated.id, updated.title);

    Ok(Json(updated.into()))
}

/// DELETE /api/projects?id=
pub async fn delete_project(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    let id = required_id(&query)?;
    find_existing(&state, id).await?;

    // Deleted between the lookup and the delete.
    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(ApiError::not_found)?;
    info!("Deleted project {} ({})", deleted.id, deleted.title);

    Ok(Json(DeleteProjectResponse::new(deleted.into())))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn required_id(query: &ProjectsQuery) -> ApiResult<i64> {
    match query.id.as_deref() {
        Some(raw) => Ok(Project::parse_id(raw)?),
        None => Err(ApiError::invalid_id()),
    }
}

async fn find_existing(state: &AppState, id: i64) -> ApiResult<Project> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)
}
