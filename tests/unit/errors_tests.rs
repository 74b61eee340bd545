/*!
 * Tests for error types and conversions
 */

use prospects::errors::{AppError, ConfigError, DaoError};

fn driver_error() -> rusqlite::Error {
    rusqlite::Error::QueryReturnedNoRows
}

#[test]
fn test_daoError_insert_shouldNameOperationAndDriverMessage() {
    let error = DaoError::Insert(driver_error());
    let display = error.to_string();
    assert!(display.contains("Could not insert new prospect"));
    assert!(display.contains(&driver_error().to_string()));
}

#[test]
fn test_daoError_connection_shouldIncludePath() {
    let error = DaoError::Connection {
        path: "/var/lib/prospects.db".to_string(),
        source: driver_error(),
    };
    let display = error.to_string();
    assert!(display.contains("Could not connect to database"));
    assert!(display.contains("/var/lib/prospects.db"));
}

#[test]
fn test_daoError_shouldExposeDriverErrorAsSource() {
    use std::error::Error;

    let error = DaoError::Search(driver_error());
    assert!(error.source().is_some());
}

#[test]
fn test_appError_fromDaoError_shouldWrapCorrectly() {
    let app_error: AppError = DaoError::Delete(driver_error()).into();
    let display = app_error.to_string();
    assert!(display.contains("Database error"));
    assert!(display.contains("Could not delete prospect"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::Invalid("busy timeout".to_string()).into();
    assert!(app_error.to_string().contains("Configuration error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = app_error.to_string();
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref m) if m == "something odd"));
}
