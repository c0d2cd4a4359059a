mod error;
mod operations;
mod requests;
mod types;

pub use error::EntryError;
pub use operations::{is_valid_email, parse_amount, parse_status_filter};
pub use requests::{CreateEntryRequest, ListEntriesQuery, UpdateEntryRequest};
pub use types::{
    DedicationType, Entry, EntryPatch, EntryStatus, NewEntry, MINIMUM_AMOUNT_CENTS,
};
