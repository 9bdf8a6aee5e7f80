//! In-memory [`ProjectStore`] for tests and ephemeral runs.

use crate::{ProjectStore, Result as DbErrorResult};

use folio_core::{NewProject, Project, ProjectChanges, ProjectQuery};

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    projects: BTreeMap<i64, Project>,
}

/// Ids are assigned sequentially from 1 and never reused, like SQLite
/// `AUTOINCREMENT`.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    inner: RwLock<Inner>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        Ok(self.inner.read().await.projects.get(&id).cloned())
    }

    async fn list(&self, query: &ProjectQuery) -> DbErrorResult<Vec<Project>> {
        let inner = self.inner.read().await;

        let mut matching: Vec<&Project> = inner
            .projects
            .values()
            .filter(|p| query.matches(p))
            .collect();
        matching.sort_by_key(|p| (p.order_index, p.id));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn count(&self) -> DbErrorResult<i64> {
        Ok(self.inner.read().await.projects.len() as i64)
    }

    async fn create(&self, project: &NewProject, now: DateTime<Utc>) -> DbErrorResult<Project> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let created = project.clone().into_project(inner.last_id, now);
        inner.projects.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        changes: &ProjectChanges,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Project>> {
        let mut inner = self.inner.write().await;

        Ok(inner.projects.get_mut(&id).map(|existing| {
            *existing = changes.merge_into(existing, now);
            existing.clone()
        }))
    }

    async fn delete(&self, id: i64) -> DbErrorResult<Option<Project>> {
        Ok(self.inner.write().await.projects.remove(&id))
    }

    async fn ping(&self) -> DbErrorResult<()> {
        Ok(())
    }
}
