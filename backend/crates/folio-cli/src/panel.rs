//! Management flow on top of [`Client`].
//!
//! State is never patched locally: every successful mutation is followed by
//! a fresh fetch of the list, and both are returned together.

use crate::{CliClientResult, Client, ProjectInput, ProjectUpdate};

use folio_core::NewProject;

use std::io::IsTerminal;

use serde_json::{Value, json};

/// Page size used when re-fetching after a mutation
pub const REFRESH_LIMIT: i64 = 100;

pub const EMPTY_STATE_HINT: &str =
    "No projects yet. Add one with `folio project create --title ... --description ... --url ...`";

pub struct ProjectPanel {
    client: Client,
}

impl ProjectPanel {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one page, reporting progress and the empty state on stderr
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
        search: Option<&str>,
    ) -> CliClientResult<Value> {
        if std::io::stderr().is_terminal() {
            eprintln!("Loading projects...");
        }

        let projects = self.client.list_projects(limit, offset, search).await?;
        if projects.as_array().is_some_and(|list| list.is_empty()) {
            eprintln!("{EMPTY_STATE_HINT}");
        }
        Ok(projects)
    }

    pub async fn get(&self, id: i64) -> CliClientResult<Value> {
        self.client.get_project(id).await
    }

    /// Check required fields locally, then POST
    pub async fn create(&self, input: ProjectInput) -> CliClientResult<Value> {
        NewProject::new(
            Some(input.title.as_str()),
            Some(input.description.as_str()),
            Some(input.url.as_str()),
        )?;

        let result = self.client.create_project(&input).await?;
        self.with_refreshed_list(result).await
    }

    pub async fn update(&self, id: i64, update: ProjectUpdate) -> CliClientResult<Value> {
        let result = self.client.update_project(id, &update).await?;
        self.with_refreshed_list(result).await
    }

    /// Caller is responsible for confirmation
    pub async fn delete(&self, id: i64) -> CliClientResult<Value> {
        let result = self.client.delete_project(id).await?;
        self.with_refreshed_list(result).await
    }

    async fn with_refreshed_list(&self, result: Value) -> CliClientResult<Value> {
        let projects = self
            .client
            .list_projects(Some(REFRESH_LIMIT), None, None)
            .await?;
        Ok(json!({ "result": result, "projects": projects }))
    }
}
