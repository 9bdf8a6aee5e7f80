use folio_core::{NewProject, Result as CoreResult};

use serde::Deserialize;

/// POST body. Required fields are optional here so that a missing field
/// is reported with its own code rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub order_index: Option<i64>,
}

impl CreateProjectRequest {
    #[track_caller]
    pub fn into_new_project(self) -> CoreResult<NewProject> {
        Ok(NewProject::new(
            self.title.as_deref(),
            self.description.as_deref(),
            self.url.as_deref(),
        )?
        .with_image_url(self.image_url.as_deref())
        .with_category(self.category.as_deref())
        .with_order_index(self.order_index))
    }
}
