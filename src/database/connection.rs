/*!
 * Database connection management.
 *
 * Every operation opens its own SQLite connection, runs, and closes it again.
 * Nothing is pooled or shared between calls. Async callers go through
 * tokio's spawn_blocking so the runtime is never blocked on disk I/O.
 */

use log::{debug, error, info, warn};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::schema;
use crate::app_config::DatabaseConfig;
use crate::errors::{DaoError, DaoResult};

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "prospects.db";

/// Default database directory name under user's data directory
const DEFAULT_DB_DIRNAME: &str = "prospects";

/// Default time to wait on a locked database file
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens one connection per call against a fixed database file
#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    /// Path to the database file
    db_path: PathBuf,
    /// How long a statement waits for a lock held by another process
    busy_timeout: Duration,
}

impl DatabaseConnector {
    /// Create a connector at the specified path, creating the file and table if needed
    pub fn new<P: AsRef<Path>>(db_path: P) -> DaoResult<Self> {
        Self::with_busy_timeout(db_path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Create a connector at the default location
    pub fn new_default() -> DaoResult<Self> {
        let db_path = Self::default_database_path()?;
        Self::new(db_path)
    }

    /// Create a connector from the configuration file settings
    pub fn from_config(config: &DatabaseConfig) -> DaoResult<Self> {
        let db_path = match &config.path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };
        Self::with_busy_timeout(db_path, Duration::from_millis(config.busy_timeout_ms))
    }

    /// Create a connector with an explicit busy timeout
    pub fn with_busy_timeout<P: AsRef<Path>>(db_path: P, busy_timeout: Duration) -> DaoResult<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if busy_timeout.as_millis() > i32::MAX as u128 {
            error!("Refusing busy timeout of {} ms for {:?}", busy_timeout.as_millis(), db_path);
            return Err(DaoError::BusyTimeout(busy_timeout.as_millis()));
        }

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Opening database at: {:?}", db_path);

        let connector = Self {
            db_path,
            busy_timeout,
        };

        // The only place allowed to create the file
        let conn = Connection::open(&connector.db_path)
            .map_err(|source| connector.connection_error(source))?;

        let result = conn
            .busy_timeout(connector.busy_timeout)
            .map_err(DaoError::Schema)
            .and_then(|_| schema::initialize_schema(&conn));
        connector.close(conn);
        result?;

        Ok(connector)
    }

    /// Get the default database path
    pub fn default_database_path() -> DaoResult<PathBuf> {
        // Try to use the system data directory
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Get the configured busy timeout
    pub fn busy_timeout(&self) -> Duration {
        self.busy_timeout
    }

    /// Open a fresh connection to the existing database file
    fn connect(&self) -> DaoResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.db_path, flags)
            .map_err(|source| self.connection_error(source))?;

        conn.busy_timeout(self.busy_timeout)
            .map_err(|source| self.connection_error(source))?;

        debug!("Connected to {:?}", self.db_path);
        Ok(conn)
    }

    // Log the driver error and wrap it with the database location
    fn connection_error(&self, source: rusqlite::Error) -> DaoError {
        error!("Could not connect to {:?}: {}", self.db_path, source);
        DaoError::Connection {
            path: self.db_path.display().to_string(),
            source,
        }
    }

    fn close(&self, conn: Connection) {
        if let Err((_, e)) = conn.close() {
            warn!("Failed to close connection to {:?}: {}", self.db_path, e);
        } else {
            debug!("Closed connection to {:?}", self.db_path);
        }
    }

    /// Execute a database operation on a connection opened for this call only
    ///
    /// The connection is closed before returning, whether `f` succeeded or not.
    /// For async contexts, use `with_connection_async`.
    pub fn with_connection<F, T>(&self, f: F) -> DaoResult<T>
    where
        F: FnOnce(&Connection) -> DaoResult<T>,
    {
        let conn = self.connect()?;
        let result = f(&conn);
        self.close(conn);
        result
    }

    /// Execute a database operation asynchronously using spawn_blocking
    ///
    /// This is the preferred method for async contexts as it prevents
    /// blocking the async runtime.
    pub async fn with_connection_async<F, T>(&self, f: F) -> DaoResult<T>
    where
        F: FnOnce(&Connection) -> DaoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let connector = self.clone();

        tokio::task::spawn_blocking(move || connector.with_connection(f))
            .await
            .map_err(|e| DaoError::Task(e.to_string()))?
    }

    /// Get database statistics
    pub fn stats(&self) -> DaoResult<DatabaseStats> {
        let prospect_count = self.with_connection(|conn| {
            conn.query_row("SELECT COUNT(*) FROM prospect", [], |row| row.get(0))
                .map_err(DaoError::Search)
        })?;

        let file_size_bytes = file_size(&self.db_path)?;

        Ok(DatabaseStats {
            prospect_count,
            file_size_bytes,
        })
    }
}

fn file_size(path: &Path) -> DaoResult<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Number of stored prospects
    pub prospect_count: i64,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for DatabaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Prospects: {}, Size: {} KB",
            self.prospect_count,
            self.file_size_bytes / 1024
        )
    }
}
