/*!
 * Data-access object for the prospect table.
 *
 * Each operation opens a connection, runs one parameterized statement and
 * closes the connection. Statement failures keep the driver error as their
 * source; nothing is retried.
 */

use log::{debug, error};
use rusqlite::{Connection, params};

use super::connection::DatabaseConnector;
use super::models::ProspectRecord;
use crate::errors::{DaoError, DaoResult};

const SELECT_ALL: &str = r#"
    SELECT cod_prospect, nome, email, celular, facebook, whatsapp
    FROM prospect
    ORDER BY cod_prospect
"#;

const SELECT_BY_EMAIL: &str = r#"
    SELECT cod_prospect, nome, email, celular, facebook, whatsapp
    FROM prospect
    WHERE email = ?1
    ORDER BY cod_prospect
"#;

/// CRUD access to prospects
#[derive(Debug, Clone)]
pub struct ProspectDao {
    connector: DatabaseConnector,
}

impl ProspectDao {
    /// Create a DAO over the given connector
    pub fn new(connector: DatabaseConnector) -> Self {
        Self { connector }
    }

    /// Create a DAO with the default database location
    pub fn new_default() -> DaoResult<Self> {
        Ok(Self::new(DatabaseConnector::new_default()?))
    }

    /// Access the underlying connector
    pub fn connector(&self) -> &DatabaseConnector {
        &self.connector
    }

    // =========================================================================
    // Async operations
    // =========================================================================

    /// Insert a new prospect and return its database ID
    ///
    /// Any `id` already set on the record is ignored.
    pub async fn insert_prospect(&self, prospect: &ProspectRecord) -> DaoResult<i64> {
        let prospect = prospect.clone();

        self.connector
            .with_connection_async(move |conn| Self::insert_sync(conn, &prospect))
            .await
    }

    /// Overwrite the fields of the prospect with `prospect.id`
    ///
    /// Returns `false` when no row has that ID.
    pub async fn update_prospect(&self, prospect: &ProspectRecord) -> DaoResult<bool> {
        let prospect = prospect.clone();

        self.connector
            .with_connection_async(move |conn| Self::update_sync(conn, &prospect))
            .await
    }

    /// Delete the prospect with the given ID
    ///
    /// Returns `false` when no row has that ID.
    pub async fn delete_prospect(&self, id: i64) -> DaoResult<bool> {
        self.connector
            .with_connection_async(move |conn| Self::delete_sync(conn, id))
            .await
    }

    /// Search prospects; all of them, or only those with exactly this email
    pub async fn search_prospects(&self, email: Option<&str>) -> DaoResult<Vec<ProspectRecord>> {
        let email = email.map(str::to_string);

        self.connector
            .with_connection_async(move |conn| Self::search_sync(conn, email.as_deref()))
            .await
    }

    // =========================================================================
    // Blocking operations
    // =========================================================================

    /// Blocking version of [`insert_prospect`](Self::insert_prospect)
    pub fn insert_prospect_blocking(&self, prospect: &ProspectRecord) -> DaoResult<i64> {
        self.connector
            .with_connection(|conn| Self::insert_sync(conn, prospect))
    }

    /// Blocking version of [`update_prospect`](Self::update_prospect)
    pub fn update_prospect_blocking(&self, prospect: &ProspectRecord) -> DaoResult<bool> {
        self.connector
            .with_connection(|conn| Self::update_sync(conn, prospect))
    }

    /// Blocking version of [`delete_prospect`](Self::delete_prospect)
    pub fn delete_prospect_blocking(&self, id: i64) -> DaoResult<bool> {
        self.connector.with_connection(|conn| Self::delete_sync(conn, id))
    }

    /// Blocking version of [`search_prospects`](Self::search_prospects)
    pub fn search_prospects_blocking(&self, email: Option<&str>) -> DaoResult<Vec<ProspectRecord>> {
        self.connector
            .with_connection(|conn| Self::search_sync(conn, email))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn insert_sync(conn: &Connection, prospect: &ProspectRecord) -> DaoResult<i64> {
        debug!("Inserting prospect <{}>", prospect.email);

        let mut stmt = conn
            .prepare(
                r#"
                INSERT INTO prospect (nome, email, celular, facebook, whatsapp)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .map_err(Self::log_failure("insert", DaoError::Insert))?;

        stmt.execute(params![
            prospect.name,
            prospect.email,
            prospect.phone,
            prospect.facebook,
            prospect.whatsapp,
        ])
        .map_err(Self::log_failure("insert", DaoError::Insert))?;

        let id = conn.last_insert_rowid();
        debug!("Inserted prospect #{}", id);
        Ok(id)
    }

    fn update_sync(conn: &Connection, prospect: &ProspectRecord) -> DaoResult<bool> {
        debug!("Updating prospect #{}", prospect.id);

        let mut stmt = conn
            .prepare(
                r#"
                UPDATE prospect SET
                    nome = ?1,
                    email = ?2,
                    celular = ?3,
                    facebook = ?4,
                    whatsapp = ?5
                WHERE cod_prospect = ?6
                "#,
            )
            .map_err(Self::log_failure("update", DaoError::Update))?;

        let changed = stmt
            .execute(params![
                prospect.name,
                prospect.email,
                prospect.phone,
                prospect.facebook,
                prospect.whatsapp,
                prospect.id,
            ])
            .map_err(Self::log_failure("update", DaoError::Update))?;

        debug!("Updated {} row(s) for prospect #{}", changed, prospect.id);
        Ok(changed > 0)
    }

    fn delete_sync(conn: &Connection, id: i64) -> DaoResult<bool> {
        debug!("Deleting prospect #{}", id);

        let mut stmt = conn
            .prepare("DELETE FROM prospect WHERE cod_prospect = ?1")
            .map_err(Self::log_failure("delete", DaoError::Delete))?;

        let deleted = stmt
            .execute([id])
            .map_err(Self::log_failure("delete", DaoError::Delete))?;

        debug!("Deleted {} row(s) for prospect #{}", deleted, id);
        Ok(deleted > 0)
    }

    fn search_sync(conn: &Connection, email: Option<&str>) -> DaoResult<Vec<ProspectRecord>> {
        let sql = match email {
            Some(email) => {
                debug!("Searching prospects with email <{}>", email);
                SELECT_BY_EMAIL
            }
            None => {
                debug!("Searching all prospects");
                SELECT_ALL
            }
        };

        let mut stmt = conn
            .prepare(sql)
            .map_err(Self::log_failure("search", DaoError::Search))?;

        let rows = match email {
            Some(email) => stmt.query_map([email], parse_prospect_row),
            None => stmt.query_map([], parse_prospect_row),
        }
        .map_err(Self::log_failure("search", DaoError::Search))?;

        let prospects = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::log_failure("search", DaoError::Search))?;

        debug!("Found {} prospect(s)", prospects.len());
        Ok(prospects)
    }

    // Log the driver error and wrap it in the operation's variant
    fn log_failure(
        operation: &'static str,
        wrap: fn(rusqlite::Error) -> DaoError,
    ) -> impl Fn(rusqlite::Error) -> DaoError {
        move |e| {
            error!("Prospect {} failed: {}", operation, e);
            wrap(e)
        }
    }
}

fn parse_prospect_row(row: &rusqlite::Row) -> rusqlite::Result<ProspectRecord> {
    Ok(ProspectRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        facebook: row.get(4)?,
        whatsapp: row.get(5)?,
    })
}
