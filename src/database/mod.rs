/*!
 * Database module for persistent storage of prospects.
 *
 * This module provides SQLite-based access to the `prospect` table:
 * - Schema bootstrap for a new database file
 * - One connection per operation, closed when the operation returns
 * - The prospect data-access object
 */

pub mod schema;
pub mod connection;
pub mod models;
pub mod dao;

// Re-export main types
pub use connection::{DatabaseConnector, DatabaseStats};
pub use dao::ProspectDao;
pub use models::ProspectRecord;
