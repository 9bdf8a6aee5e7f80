use crate::{CliClientResult, ClientError, ProjectInput, ProjectUpdate};

use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

const PROJECTS_PATH: &str = "/api/projects";

/// HTTP client for the folio-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request against the projects resource with `params` encoded
    /// into the query string
    fn request(
        &self,
        method: Method,
        params: &[(&str, String)],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let raw = format!("{}{}", self.base_url, PROJECTS_PATH);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(self.client.request(method, url))
    }

    /// Execute request and turn error bodies into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies are `{ "error": "...", "code": "..." }`; anything
            // else is reported verbatim.
            let body: Option<Value> = serde_json::from_str(&text).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| match text.trim() {
                    "" => status.to_string(),
                    other => other.to_string(),
                });
            let code = body
                .as_ref()
                .and_then(|b| b.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List projects, one page
    pub async fn list_projects(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
        search: Option<&str>,
    ) -> CliClientResult<Value> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(search) = search {
            params.push(("search", search.to_string()));
        }

        let req = self.request(Method::GET, &params)?;
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &[("id", id.to_string())])?;
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(&self, input: &ProjectInput) -> CliClientResult<Value> {
        let req = self.request(Method::POST, &[])?.json(input);
        self.execute(req).await
    }

    /// Update the supplied fields of a project
    pub async fn update_project(&self, id: i64, update: &ProjectUpdate) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &[("id", id.to_string())])?
            .json(update);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &[("id", id.to_string())])?;
        self.execute(req).await
    }
}
