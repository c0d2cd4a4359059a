//! API request types for entry operations.
//!
//! Each request is deserialized leniently and then validated into a domain
//! value ([`NewEntry`], [`EntryPatch`]) before anything touches storage.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::serde::{deserialize_optional_text, deserialize_present, normalize_optional};

use super::error::EntryError;
use super::operations::{is_valid_email, parse_amount, parse_status_filter};
use super::types::{DedicationType, EntryPatch, EntryStatus, NewEntry};

/// Request payload for creating a new entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub sponsor_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub phone: Option<String>,
    /// Kept untyped: any truthy non-member is rejected, not dropped.
    #[serde(default)]
    pub dedication_type: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub dedication_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub preferred_date: Option<String>,
    /// Kept untyped: clients send numbers as well as numeric strings.
    #[serde(default)]
    pub amount: Option<Value>,
}

impl CreateEntryRequest {
    /// Create a request with the required fields.
    pub fn new(
        sponsor_name: impl Into<String>,
        email: impl Into<String>,
        dedication_name: impl Into<String>,
        amount: impl Into<Value>,
    ) -> Self {
        Self {
            sponsor_name: Some(sponsor_name.into()),
            email: Some(email.into()),
            dedication_name: Some(dedication_name.into()),
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_dedication_type(mut self, dedication_type: impl Into<Value>) -> Self {
        self.dedication_type = Some(dedication_type.into());
        self
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_preferred_date(mut self, preferred_date: impl Into<String>) -> Self {
        self.preferred_date = Some(preferred_date.into());
        self
    }

    /// Validate and normalize into a [`NewEntry`] stamped with the current time.
    pub fn validate(self) -> Result<NewEntry, EntryError> {
        self.validate_at(Utc::now())
    }

    /// Validate and normalize into a [`NewEntry`] created at `now`.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate_at(self, now: DateTime<Utc>) -> Result<NewEntry, EntryError> {
        let sponsor_name =
            required_text(self.sponsor_name).ok_or(EntryError::MissingSponsorName)?;

        let email = required_text(self.email).ok_or(EntryError::MissingEmail)?;
        if !is_valid_email(&email) {
            return Err(EntryError::InvalidEmail);
        }

        let dedication_name =
            required_text(self.dedication_name).ok_or(EntryError::MissingDedicationName)?;

        let dedication_type = parse_dedication_type(self.dedication_type.as_ref())?;

        let amount = parse_amount(self.amount.as_ref().ok_or(EntryError::MissingAmount)?)?;

        Ok(NewEntry {
            sponsor_name,
            email: email.to_lowercase(),
            phone: normalize_optional(self.phone),
            dedication_type,
            dedication_name,
            occasion: normalize_optional(self.occasion),
            message: normalize_optional(self.message),
            preferred_date: self.preferred_date.filter(|d| !d.is_empty()),
            amount,
            status: EntryStatus::default(),
            created_at: now,
        })
    }
}

/// Falsy values (`null`, `""`, `false`, `0`) select the default type.
fn parse_dedication_type(value: Option<&Value>) -> Result<DedicationType, EntryError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(DedicationType::default()),
        Some(Value::String(s)) if s.is_empty() => Ok(DedicationType::default()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(DedicationType::default()),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err(EntryError::InvalidDedicationType),
    }
}

/// A required text field, trimmed; blank counts as missing.
fn required_text(value: Option<String>) -> Option<String> {
    normalize_optional(value)
}

/// Request payload for a partial update.
///
/// Only `status` and `assigned_date` can change after creation. Both are kept
/// untyped so that a wrong JSON type reaches validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<Value>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub assigned_date: Option<Option<Value>>,
}

impl UpdateEntryRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<Value>) -> Self {
        self.status = Some(Some(status.into()));
        self
    }

    pub fn with_assigned_date(mut self, assigned_date: impl Into<Value>) -> Self {
        self.assigned_date = Some(Some(assigned_date.into()));
        self
    }

    pub fn validate(self) -> Result<EntryPatch, EntryError> {
        self.validate_at(Utc::now())
    }

    /// Validate into an [`EntryPatch`] that refreshes `updated_at` to `now`.
    ///
    /// A status that is `null` or not a string is invalid. An explicit `null`
    /// assigned date clears it; a non-string one counts as not supplied.
    pub fn validate_at(self, now: DateTime<Utc>) -> Result<EntryPatch, EntryError> {
        let status = match self.status {
            None => None,
            Some(Some(Value::String(s))) => Some(s.parse::<EntryStatus>()?),
            Some(_) => return Err(EntryError::InvalidStatus),
        };

        let assigned_date = match self.assigned_date {
            Some(None) => Some(None),
            Some(Some(Value::String(s))) => Some(Some(s)),
            _ => None,
        };

        if status.is_none() && assigned_date.is_none() {
            return Err(EntryError::NoUpdatableFields);
        }

        Ok(EntryPatch {
            status,
            assigned_date,
            updated_at: now,
        })
    }
}

/// Query parameters for listing entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntriesQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl ListEntriesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The parsed status filter, if one was given.
    pub fn status_filter(&self) -> Result<Option<EntryStatus>, EntryError> {
        parse_status_filter(self.status.as_deref())
    }
}
