//! SQLite-backed project repository.
//!
//! Timestamps are stored as RFC 3339 text, which also sorts chronologically.
//! Search uses `LIKE` with wildcards in the input escaped, so it is a plain
//! substring match (case-insensitive for ASCII).

use crate::{DbError, ProjectStore, Result as DbErrorResult};

use folio_core::{
    DEFAULT_ORDER_INDEX, NewProject, Project, ProjectChanges, ProjectQuery, timestamp,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const TABLE: &str = "projects";

const RETURNING: &str = r#"
    RETURNING id, title, description, url, image_url, category, order_index,
        created_at, updated_at
"#;

/// `previous + 1ms` in the stored timestamp format. Both operands of the
/// `MAX` share that fixed-width format, so text order is time order.
const NEXT_UPDATED_AT: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', updated_at, '+0.001 seconds')";

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    url: String,
    image_url: Option<String>,
    category: Option<String>,
    order_index: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(r: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: r.id,
            title: r.title,
            description: r.description,
            url: r.url,
            image_url: r.image_url,
            category: r.category,
            order_index: r.order_index,
            created_at: timestamp::parse(&r.created_at).map_err(|e| DbError::decode(TABLE, e))?,
            updated_at: timestamp::parse(&r.updated_at).map_err(|e| DbError::decode(TABLE, e))?,
        })
    }
}

/// Escape `LIKE` metacharacters so `needle` matches literally
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, description, url, image_url, category, order_index,
                    created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn list(&self, query: &ProjectQuery) -> DbErrorResult<Vec<Project>> {
        let rows = match &query.search {
            Some(needle) => {
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                        SELECT id, title, description, url, image_url, category, order_index,
                            created_at, updated_at
                        FROM projects
                        WHERE title LIKE ?1 ESCAPE '\'
                            OR description LIKE ?1 ESCAPE '\'
                            OR category LIKE ?1 ESCAPE '\'
                        ORDER BY order_index ASC, id ASC
                        LIMIT ?2 OFFSET ?3
                    "#,
                )
                .bind(like_pattern(needle))
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectRow>(
                    r#"
                        SELECT id, title, description, url, image_url, category, order_index,
                            created_at, updated_at
                        FROM projects
                        ORDER BY order_index ASC, id ASC
                        LIMIT ?1 OFFSET ?2
                    "#,
                )
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create(&self, project: &NewProject, now: DateTime<Utc>) -> DbErrorResult<Project> {
        let stamp = timestamp::format(&now);

        let result = sqlx::query(
            r#"
                INSERT INTO projects (
                    title, description, url, image_url, category, order_index,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.url)
        .bind(&project.image_url)
        .bind(&project.category)
        .bind(project.order_index)
        .bind(&stamp)
        .bind(&stamp)
        .execute(&self.pool)
        .await?;

        Ok(project.clone().into_project(result.last_insert_rowid(), now))
    }

    async fn update(
        &self,
        id: i64,
        changes: &ProjectChanges,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Project>> {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE projects SET ");
        let mut columns = builder.separated(", ");

        if let Some(title) = &changes.title {
            columns.push("title = ").push_bind_unseparated(title.as_str());
        }
        if let Some(description) = &changes.description {
            columns
                .push("description = ")
                .push_bind_unseparated(description.as_str());
        }
        if let Some(url) = &changes.url {
            columns.push("url = ").push_bind_unseparated(url.as_str());
        }
        if let Some(image_url) = &changes.image_url {
            columns
                .push("image_url = ")
                .push_bind_unseparated(image_url.as_deref());
        }
        if let Some(category) = &changes.category {
            columns
                .push("category = ")
                .push_bind_unseparated(category.as_deref());
        }
        if let Some(order_index) = changes.order_index {
            columns
                .push("order_index = ")
                .push_bind_unseparated(order_index.unwrap_or(DEFAULT_ORDER_INDEX));
        }
        columns
            .push("updated_at = MAX(")
            .push_bind_unseparated(timestamp::format(&now))
            .push_unseparated(format!(", {NEXT_UPDATED_AT})"));

        builder.push(" WHERE id = ").push_bind(id).push(RETURNING);

        let row = builder
            .build_query_as::<ProjectRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(Project::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "DELETE FROM projects WHERE id = ? {RETURNING}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
