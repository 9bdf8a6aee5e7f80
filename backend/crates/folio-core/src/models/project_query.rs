//! Paging and search parameters for listing projects.

use crate::Project;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Hard cap on a single page
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size bounds, normally taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: i64,
    pub max_size: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

/// A normalised list request. `limit` and `offset` are never negative and
/// `limit` never exceeds the configured maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub limit: i64,
    pub offset: i64,
    /// Substring matched against title, description or category
    pub search: Option<String>,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            search: None,
        }
    }
}

impl ProjectQuery {
    /// Build a query from raw query-string values.
    ///
    /// Malformed input is never rejected: an unparsable limit falls back to
    /// the default, out-of-range values are clamped, and an unparsable or
    /// negative offset becomes 0. A blank search means no filter.
    pub fn from_params(
        limit: Option<&str>,
        offset: Option<&str>,
        search: Option<&str>,
        limits: PageLimits,
    ) -> Self {
        let max_size = limits.max_size.max(0);

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(limits.default_size)
            .clamp(0, max_size);

        let offset = offset
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .max(0);

        let search = search
            .filter(|needle| !needle.trim().is_empty())
            .map(String::from);

        Self {
            limit,
            offset,
            search,
        }
    }

    /// Whether `project` passes the search filter.
    ///
    /// ASCII letters compare case-insensitively, matching SQLite `LIKE`.
    pub fn matches(&self, project: &Project) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        let needle = needle.to_ascii_lowercase();

        [
            Some(project.title.as_str()),
            Some(project.description.as_str()),
            project.category.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_ascii_lowercase().contains(&needle))
    }
}
