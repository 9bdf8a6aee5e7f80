use thiserror::Error;

/// Start-up failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] folio_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] folio_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
