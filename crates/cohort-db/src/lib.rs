//! # cohort-db
//!
//! libSQL record store for the cohort tools API.
//!
//! Holds the two collections, `cohorts` and `students`, as SQL tables with
//! UNIQUE indexes on `cohort_slug` and `email`. Repository methods live in
//! [`repos`] as `impl RecordStore` blocks; partial updates are described by
//! the builders in [`updates`].
//!
//! A store is an explicitly constructed value: the server receives one at
//! startup and tests open their own against `:memory:`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod updates;

#[cfg(test)]
mod test_support;

use cohort_config::DatabaseConfig;
use cohort_core::ids::ID_BYTES;
use error::DatabaseError;
use libsql::Builder;

/// Handle to the record store.
///
/// Wraps a libSQL database and a single connection, which is cheap to share
/// across request tasks.
pub struct RecordStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RecordStore {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        tracing::debug!(path, "opened local record store");
        Ok(store)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        tracing::debug!(url, "opened remote record store");
        Ok(store)
    }

    /// Open whichever store the configuration points at.
    ///
    /// # Errors
    ///
    /// See [`open_local`](Self::open_local) and [`open_remote`](Self::open_remote).
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.url).await
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a fresh identifier: 12 random bytes as 24 lowercase hex chars.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT lower(hex(randomblob({ID_BYTES})))"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
