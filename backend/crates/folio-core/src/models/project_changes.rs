//! Partial update of a project.
//!
//! Every field is optional; `None` means "leave unchanged". The nullable
//! columns use a nested `Option` so that an explicit clear (`Some(None)`) is
//! distinguishable from "not supplied" (`None`).

use crate::models::text;
use crate::{DEFAULT_ORDER_INDEX, Project, RequiredField, Result as CoreResult};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<Option<String>>,
    pub category: Option<Option<String>>,
    /// `Some(None)` resets to the default position
    pub order_index: Option<Option<i64>>,
}

impl ProjectChanges {
    /// Trim and check the supplied fields.
    ///
    /// Required text fields that are supplied must be non-blank after
    /// trimming. Blank optional text becomes an explicit clear and a cleared
    /// `order_index` becomes the default position.
    #[track_caller]
    pub fn normalized(&self) -> CoreResult<ProjectChanges> {
        let title = match &self.title {
            Some(title) => Some(text::required(Some(title), RequiredField::Title)?),
            None => None,
        };
        let description = match &self.description {
            Some(description) => Some(text::required(
                Some(description),
                RequiredField::Description,
            )?),
            None => None,
        };
        let url = match &self.url {
            Some(url) => Some(text::required(Some(url), RequiredField::Url)?),
            None => None,
        };

        Ok(ProjectChanges {
            title,
            description,
            url,
            image_url: self
                .image_url
                .as_ref()
                .map(|value| text::optional(value.as_deref())),
            category: self
                .category
                .as_ref()
                .map(|value| text::optional(value.as_deref())),
            order_index: self
                .order_index
                .map(|value| Some(value.unwrap_or(DEFAULT_ORDER_INDEX))),
        })
    }

    /// Produce the updated record without touching `project`.
    ///
    /// On error nothing is applied.
    #[track_caller]
    pub fn apply(&self, project: &Project, now: DateTime<Utc>) -> CoreResult<Project> {
        Ok(self.normalized()?.merge_into(project, now))
    }

    /// Overwrite the supplied fields of `project` as given.
    ///
    /// Expects changes that came out of [`ProjectChanges::normalized`].
    pub fn merge_into(&self, project: &Project, now: DateTime<Utc>) -> Project {
        let mut updated = project.clone();

        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(url) = &self.url {
            updated.url = url.clone();
        }
        if let Some(image_url) = &self.image_url {
            updated.image_url = image_url.clone();
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        if let Some(order_index) = self.order_index {
            updated.order_index = order_index.unwrap_or(DEFAULT_ORDER_INDEX);
        }

        updated.updated_at = project.next_updated_at(now);
        updated
    }
}
