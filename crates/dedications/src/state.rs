//! Application state shared with every request handler.

use std::sync::Arc;

use dedications_core::storage::EntryRepository;

use crate::{config::Config, service::EntryService};

/// Shared application state.
///
/// Cheap to clone: the repository sits behind an `Arc` inside the service.
#[derive(Clone)]
pub struct AppState {
    pub entries: EntryService,
    pub config: Config,
}

impl AppState {
    /// Create state around an already initialized repository.
    pub fn new(entry_repo: Arc<dyn EntryRepository>, config: Config) -> Self {
        Self {
            entries: EntryService::new(entry_repo),
            config,
        }
    }
}
