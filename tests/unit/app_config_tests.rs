/*!
 * Tests for application configuration functionality
 */

use prospects::app_config::{Config, LogLevel};
use prospects::errors::ConfigError;

use crate::common;

/// A missing file is created with the defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).expect("Failed to create config");

    assert!(path.exists());
    assert_eq!(config.database.path, None);
    assert_eq!(config.log_level, LogLevel::Info);

    let reloaded = Config::load(&path).expect("Failed to reload config");
    assert_eq!(reloaded.database, config.database);
}

/// Saved values come back unchanged
#[test]
fn test_saveThenLoad_shouldKeepValues() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.database.path = Some(dir.path().join("crm.db"));
    config.database.busy_timeout_ms = 1500;
    config.log_level = LogLevel::Debug;
    config.save(&path).unwrap();

    let loaded = Config::load_or_create(&path).unwrap();
    assert_eq!(loaded.database.path, Some(dir.path().join("crm.db")));
    assert_eq!(loaded.database.busy_timeout_ms, 1500);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

/// Malformed JSON is a parse error, not a silent default
#[test]
fn test_load_withInvalidJson_shouldReturnParseError() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_withMissingFile_shouldReturnReadError() {
    let dir = common::create_temp_dir().unwrap();
    let result = Config::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}
