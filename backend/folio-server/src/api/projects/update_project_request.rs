use folio_core::ProjectChanges;

use serde::Deserialize;

/// PUT body. Absent fields are left alone; for the nullable fields an
/// explicit `null` clears the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,

    /// `null` moves the project back to the default position
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub order_index: Option<Option<i64>>,
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(r: UpdateProjectRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            url: r.url,
            image_url: r.image_url,
            category: r.category,
            order_index: r.order_index,
        }
    }
}
