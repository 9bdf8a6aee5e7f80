//! Storage interface the HTTP handlers depend on.

use crate::Result as DbErrorResult;

use folio_core::{NewProject, Project, ProjectChanges, ProjectQuery};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence for [`Project`] records.
///
/// Each method is a single statement against the store; callers that need
/// check-then-act sequences get no transaction around them.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>>;

    /// One page of projects, ascending by `order_index` then `id`
    async fn list(&self, query: &ProjectQuery) -> DbErrorResult<Vec<Project>>;

    async fn count(&self) -> DbErrorResult<i64>;

    /// Insert and return the stored record with its assigned id.
    /// `created_at` and `updated_at` are both set to `now`.
    async fn create(&self, project: &NewProject, now: DateTime<Utc>) -> DbErrorResult<Project>;

    /// Write only the fields supplied in `changes` and return the stored
    /// record, or `None` if the row does not exist.
    ///
    /// `changes` must come from [`ProjectChanges::normalized`]. `updated_at`
    /// becomes `max(now, previous updated_at + 1ms)`.
    async fn update(
        &self,
        id: i64,
        changes: &ProjectChanges,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Project>>;

    /// Remove and return the record, or `None` if there was nothing to delete.
    async fn delete(&self, id: i64) -> DbErrorResult<Option<Project>>;

    /// Cheap round-trip used by readiness checks
    async fn ping(&self) -> DbErrorResult<()>;
}
