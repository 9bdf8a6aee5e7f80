//! Validated input for creating a project.

use crate::models::text;
use crate::{DEFAULT_ORDER_INDEX, Project, RequiredField, Result as CoreResult};

use chrono::{DateTime, Utc};

/// A project that passed create-time validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub order_index: i64,
}

impl NewProject {
    /// Trim and validate the required fields.
    ///
    /// Fields are checked in the order title, description, url; the first
    /// blank one is reported.
    #[track_caller]
    pub fn new(
        title: Option<&str>,
        description: Option<&str>,
        url: Option<&str>,
    ) -> CoreResult<Self> {
        Ok(Self {
            title: text::required(title, RequiredField::Title)?,
            description: text::required(description, RequiredField::Description)?,
            url: text::required(url, RequiredField::Url)?,
            image_url: None,
            category: None,
            order_index: DEFAULT_ORDER_INDEX,
        })
    }

    pub fn with_image_url(mut self, image_url: Option<&str>) -> Self {
        self.image_url = text::optional(image_url);
        self
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = text::optional(category);
        self
    }

    pub fn with_order_index(mut self, order_index: Option<i64>) -> Self {
        self.order_index = order_index.unwrap_or(DEFAULT_ORDER_INDEX);
        self
    }

    /// Materialise the record once storage has assigned an id.
    pub fn into_project(self, id: i64, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            image_url: self.image_url,
            category: self.category,
            order_index: self.order_index,
            created_at: now,
            updated_at: now,
        }
    }
}
