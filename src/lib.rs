/*!
 * # Prospects
 *
 * A Rust library for storing prospect contacts (name, email, phone,
 * Facebook, WhatsApp) in a SQLite table.
 *
 * ## Features
 *
 * - Insert, update, delete and search prospects
 * - Parameterized statements only
 * - A fresh connection for every operation, closed before it returns
 * - Async operations on tokio's blocking pool, plus blocking variants
 * - JSON configuration file for the database location
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence:
 *   - `database::schema`: Table bootstrap
 *   - `database::connection`: Per-call connection handling
 *   - `database::models`: The prospect record
 *   - `database::dao`: CRUD operations
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseConnector, ProspectDao, ProspectRecord};
pub use errors::{AppError, ConfigError, DaoError, DaoResult};
