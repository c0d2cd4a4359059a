//! SQLite repository implementation.
//!
//! Implements `EntryRepository` from `dedications_core::storage` on top of a
//! single `tokio_rusqlite` connection. All statements run on the connection's
//! background thread, one at a time.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::ToSql;
use tokio_rusqlite::Connection;

use dedications_core::entry::{Entry, EntryPatch, EntryStatus, NewEntry};
use dedications_core::storage::{EntryRepository, RepositoryError, Result};

use super::conversions::{
    dedication_type_to_string, format_datetime, row_to_entry, status_to_string,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based entry repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (creating if needed) a file-based database and prepares it.
    ///
    /// Switches the journal to WAL and creates the schema if it is missing.
    /// Existing data is never touched.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let journal_mode = Self::init_schema(&conn).await?;
        tracing::info!(
            path = %path.display(),
            journal_mode = %journal_mode,
            "Opened SQLite entry store"
        );

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Enable WAL and create tables. Returns the journal mode now in effect.
    ///
    /// In-memory databases report `memory`; they cannot use WAL.
    async fn init_schema(conn: &Connection) -> Result<String> {
        conn.call(|conn| {
            let mode: String = conn
                .pragma_update_and_check(None, "journal_mode", schema::JOURNAL_MODE, |row| {
                    row.get(0)
                })
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(mode)
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Closes the underlying connection, flushing outstanding work.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await.map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn list_entries(&self, status: Option<EntryStatus>) -> Result<Vec<Entry>> {
        let status = status.map(status_to_string);

        self.conn
            .call(move |conn| {
                let mut stmt = match status {
                    Some(_) => conn.prepare(schema::SELECT_ENTRIES_BY_STATUS),
                    None => conn.prepare(schema::SELECT_ENTRIES),
                }
                .map_err(wrap_err)?;

                let rows = match status {
                    Some(status) => stmt.query_map([status], row_to_entry),
                    None => stmt.query_map([], row_to_entry),
                }
                .map_err(wrap_err)?;

                let mut entries = Vec::new();
                for row_result in rows {
                    entries.push(row_result.map_err(wrap_err)?);
                }
                Ok(entries)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRY_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_entry) {
                    Ok(entry) => Ok(Some(entry)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn create_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let sponsor_name = entry.sponsor_name.clone();
        let email = entry.email.clone();
        let phone = entry.phone.clone();
        let dedication_type = dedication_type_to_string(entry.dedication_type);
        let dedication_name = entry.dedication_name.clone();
        let occasion = entry.occasion.clone();
        let message = entry.message.clone();
        let preferred_date = entry.preferred_date.clone();
        let amount = entry.amount;
        let status = status_to_string(entry.status);
        let created_at = format_datetime(&entry.created_at);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_ENTRY,
                    rusqlite::params![
                        sponsor_name,
                        email,
                        phone,
                        dedication_type,
                        dedication_name,
                        occasion,
                        message,
                        preferred_date,
                        amount,
                        status,
                        created_at
                    ],
                    row_to_entry,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_entry(&self, id: i64, patch: &EntryPatch) -> Result<Entry> {
        let sql = schema::update_entry_sql(patch);
        let status = patch.status.map(status_to_string);
        let assigned_date = patch.assigned_date.clone();
        let updated_at = format_datetime(&patch.updated_at);

        self.conn
            .call(move |conn| {
                let mut params: Vec<(&str, &dyn ToSql)> = Vec::with_capacity(4);
                params.push((":id", &id as &dyn ToSql));
                params.push((":updated_at", &updated_at as &dyn ToSql));
                if let Some(status) = &status {
                    params.push((":status", status as &dyn ToSql));
                }
                if let Some(assigned_date) = &assigned_date {
                    params.push((":assigned_date", assigned_date as &dyn ToSql));
                }

                conn.query_row(&sql, params.as_slice(), row_to_entry)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn delete_entry(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ENTRY, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
