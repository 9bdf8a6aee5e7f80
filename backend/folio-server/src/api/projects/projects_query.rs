use folio_core::{PageLimits, ProjectQuery};

use serde::Deserialize;

/// Query string shared by every method on `/api/projects`.
///
/// Values stay raw strings so malformed paging never rejects the request.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    pub id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
}

impl ProjectsQuery {
    /// The `id` parameter if it carries anything but whitespace
    pub fn non_blank_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|raw| !raw.trim().is_empty())
    }

    pub fn to_project_query(&self, limits: PageLimits) -> ProjectQuery {
        ProjectQuery::from_params(
            self.limit.as_deref(),
            self.offset.as_deref(),
            self.search.as_deref(),
            limits,
        )
    }
}
