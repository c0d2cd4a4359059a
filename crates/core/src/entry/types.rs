use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::EntryError;

/// Minimum accepted donation, in cents ($18).
pub const MINIMUM_AMOUNT_CENTS: i64 = 1800;

/// Lifecycle stage of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Pending,
    Approved,
    Scheduled,
    Completed,
    Cancelled,
}

impl EntryStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [EntryStatus; 5] = [
        EntryStatus::Pending,
        EntryStatus::Approved,
        EntryStatus::Scheduled,
        EntryStatus::Completed,
        EntryStatus::Cancelled,
    ];

    /// Returns the wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
            EntryStatus::Scheduled => "scheduled",
            EntryStatus::Completed => "completed",
            EntryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = EntryError;

    /// Parses an exact, case-sensitive status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(EntryError::InvalidStatus)
    }
}

/// Whether the dedication honors a living or a deceased person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DedicationType {
    #[default]
    #[serde(rename = "In Honor Of")]
    InHonorOf,
    #[serde(rename = "In Memory Of")]
    InMemoryOf,
}

impl DedicationType {
    pub const ALL: [DedicationType; 2] = [DedicationType::InHonorOf, DedicationType::InMemoryOf];

    pub fn as_str(&self) -> &'static str {
        match self {
            DedicationType::InHonorOf => "In Honor Of",
            DedicationType::InMemoryOf => "In Memory Of",
        }
    }
}

impl fmt::Display for DedicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DedicationType {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DedicationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(EntryError::InvalidDedicationType)
    }
}

/// A persisted dedication entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub sponsor_name: String,
    /// Always trimmed and lower-cased.
    pub email: String,
    pub phone: Option<String>,
    pub dedication_type: DedicationType,
    /// Name of the person being honored or remembered.
    pub dedication_name: String,
    pub occasion: Option<String>,
    pub message: Option<String>,
    /// Free-form date string supplied by the sponsor, stored as given.
    pub preferred_date: Option<String>,
    /// Date chosen by staff, only set through an update.
    pub assigned_date: Option<String>,
    /// Donation amount in cents.
    pub amount: i64,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated entry that has not been stored yet.
///
/// Produced by [`CreateEntryRequest::validate`](super::CreateEntryRequest::validate);
/// storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub sponsor_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dedication_type: DedicationType,
    pub dedication_name: String,
    pub occasion: Option<String>,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub amount: i64,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated partial update.
///
/// `None` leaves a column untouched. `assigned_date: Some(None)` clears the
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPatch {
    pub status: Option<EntryStatus>,
    pub assigned_date: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_accepts_every_variant() {
        for status in EntryStatus::ALL {
            assert_eq!(status.as_str().parse::<EntryStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert_eq!(
            "Approved".parse::<EntryStatus>(),
            Err(EntryError::InvalidStatus)
        );
        assert_eq!("bogus".parse::<EntryStatus>(), Err(EntryError::InvalidStatus));
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(EntryStatus::default(), EntryStatus::Pending);
    }

    #[test]
    fn test_dedication_type_parse() {
        assert_eq!(
            "In Memory Of".parse::<DedicationType>(),
            Ok(DedicationType::InMemoryOf)
        );
        assert_eq!(
            "in honor of".parse::<DedicationType>(),
            Err(EntryError::InvalidDedicationType)
        );
    }

    #[test]
    fn test_enums_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&EntryStatus::Cancelled).unwrap(),
            r#""cancelled""#
        );
        assert_eq!(
            serde_json::to_string(&DedicationType::InHonorOf).unwrap(),
            r#""In Honor Of""#
        );
    }
}
