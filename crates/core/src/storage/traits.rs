use async_trait::async_trait;

use crate::entry::{Entry, EntryPatch, EntryStatus, NewEntry};

use super::Result;

/// Repository for dedication entries.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists entries, newest first, optionally restricted to one status.
    async fn list_entries(&self, status: Option<EntryStatus>) -> Result<Vec<Entry>>;

    /// Gets an entry by its ID.
    async fn get_entry(&self, id: i64) -> Result<Option<Entry>>;

    /// Stores a new entry and returns it as persisted, with its assigned ID.
    async fn create_entry(&self, entry: &NewEntry) -> Result<Entry>;

    /// Applies a partial update and returns the updated entry.
    ///
    /// Fails with `NotFound` when no entry has this ID.
    async fn update_entry(&self, id: i64, patch: &EntryPatch) -> Result<Entry>;

    /// Deletes an entry by its ID.
    ///
    /// Fails with `NotFound` when no entry has this ID.
    async fn delete_entry(&self, id: i64) -> Result<()>;

    /// Checks that the backing store answers queries.
    async fn ping(&self) -> Result<()>;
}
