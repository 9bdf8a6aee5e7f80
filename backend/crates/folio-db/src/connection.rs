use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if needed) the SQLite database at `path`.
pub async fn connect(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    info!("Connecting to database: {}", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    Ok(pool)
}

/// Bring the schema up to date.
pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
