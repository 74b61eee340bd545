/*!
 * Error types for the prospects crate.
 *
 * This module contains custom error types for the data-access layer and the
 * configuration loader, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Result type returned by every data-access operation
pub type DaoResult<T> = Result<T, DaoError>;

/// Errors that can occur when talking to the prospect database
#[derive(Error, Debug)]
pub enum DaoError {
    /// The database could not be opened
    #[error("Could not connect to database at {path}: {source}")]
    Connection {
        /// Location of the database file
        path: String,
        /// Driver error
        #[source]
        source: rusqlite::Error,
    },

    /// The busy timeout does not fit SQLite's millisecond range
    #[error("Busy timeout of {0} ms is out of range (maximum {max} ms)", max = i32::MAX)]
    BusyTimeout(u128),

    /// The prospect table could not be created or inspected
    #[error("Could not prepare the prospect table: {0}")]
    Schema(#[source] rusqlite::Error),

    /// The INSERT statement failed
    #[error("Could not insert new prospect: {0}")]
    Insert(#[source] rusqlite::Error),

    /// The UPDATE statement failed
    #[error("Could not update prospect: {0}")]
    Update(#[source] rusqlite::Error),

    /// The DELETE statement failed
    #[error("Could not delete prospect: {0}")]
    Delete(#[source] rusqlite::Error),

    /// The SELECT statement failed
    #[error("Could not search prospects: {0}")]
    Search(#[source] rusqlite::Error),

    /// Filesystem error around the database file
    #[error("Database file error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking task running the statement did not complete
    #[error("Database task failed: {0}")]
    Task(String),
}

/// Errors that can occur when loading or saving the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Values that parse but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type that wraps all other errors
///
/// The `prospects` binary returns it from configuration loading and database setup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the data-access layer
    #[error("Database error: {0}")]
    Dao(#[from] DaoError),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
