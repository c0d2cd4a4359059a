//! Entry service: validation plus repository calls.
//!
//! Handlers only translate HTTP into these calls and the results back. Every
//! check runs before anything is written, so a rejected request never leaves a
//! partial row behind.

use std::sync::Arc;

use thiserror::Error;

use dedications_core::entry::{
    CreateEntryRequest, Entry, EntryError, ListEntriesQuery, UpdateEntryRequest,
};
use dedications_core::storage::{EntryRepository, RepositoryError};

/// Errors returned by [`EntryService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidArgument(#[from] EntryError),
    #[error("Entry not found")]
    NotFound,
    #[error(transparent)]
    Storage(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ServiceError::NotFound,
            other => ServiceError::Storage(other),
        }
    }
}

/// Parses an entry id taken from a URL path.
///
/// Anything that is not an integer cannot name a row, so it is reported as
/// not found rather than as a bad request.
pub fn parse_entry_id(raw: &str) -> Result<i64, ServiceError> {
    raw.parse().map_err(|_| ServiceError::NotFound)
}

#[derive(Clone)]
pub struct EntryService {
    repo: Arc<dyn EntryRepository>,
}

impl EntryService {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { repo }
    }

    /// Entries newest first, optionally restricted to one status.
    pub async fn list(&self, query: &ListEntriesQuery) -> Result<Vec<Entry>, ServiceError> {
        let status = query.status_filter()?;
        Ok(self.repo.list_entries(status).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Entry, ServiceError> {
        self.repo.get_entry(id).await?.ok_or(ServiceError::NotFound)
    }

    /// Validates the request and stores a new pending entry.
    pub async fn create(&self, request: CreateEntryRequest) -> Result<Entry, ServiceError> {
        let entry = request.validate()?;
        let created = self.repo.create_entry(&entry).await?;
        tracing::info!(entry_id = created.id, "Created entry");
        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// A missing entry wins over an invalid body: existence is checked first.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateEntryRequest,
    ) -> Result<Entry, ServiceError> {
        self.get(id).await?;
        let patch = request.validate()?;
        let updated = self.repo.update_entry(id, &patch).await?;
        tracing::info!(entry_id = id, status = %updated.status, "Updated entry");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_entry(id).await?;
        tracing::info!(entry_id = id, "Deleted entry");
        Ok(())
    }

    /// Checks that the store answers a trivial query.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.repo.ping().await?)
    }
}
