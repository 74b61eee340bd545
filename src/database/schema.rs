/*!
 * Database schema definition.
 *
 * Creates the `prospect` table when the database file is new. The table
 * layout is fixed; there is no versioning or migration.
 */

use log::{debug, info};
use rusqlite::Connection;

use crate::errors::{DaoError, DaoResult};

/// Name of the prospect table
pub const PROSPECT_TABLE: &str = "prospect";

/// Create the prospect table if it does not exist yet
pub fn initialize_schema(conn: &Connection) -> DaoResult<()> {
    if table_exists(conn)? {
        debug!("Table '{}' already present", PROSPECT_TABLE);
        return Ok(());
    }

    info!("Creating table '{}'", PROSPECT_TABLE);
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS prospect (
            cod_prospect INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            email TEXT NOT NULL,
            celular TEXT NOT NULL,
            facebook TEXT NOT NULL,
            whatsapp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_prospect_email ON prospect(email);
        "#,
    )
    .map_err(DaoError::Schema)?;

    Ok(())
}

/// Check whether the prospect table exists
pub fn table_exists(conn: &Connection) -> DaoResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
            [PROSPECT_TABLE],
            |row| row.get(0),
        )
        .map_err(DaoError::Schema)?;

    Ok(count > 0)
}
