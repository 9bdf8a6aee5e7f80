use folio_core::{Project, timestamp};

use serde::Serialize;

/// Project as it appears on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            url: p.url,
            image_url: p.image_url,
            category: p.category,
            order_index: p.order_index,
            created_at: timestamp::format(&p.created_at),
            updated_at: timestamp::format(&p.updated_at),
        }
    }
}
