use thiserror::Error;

/// Validation failures for entry requests.
///
/// The display strings are returned verbatim to API clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("sponsor_name is required")]
    MissingSponsorName,
    #[error("email is required")]
    MissingEmail,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("dedication_name is required")]
    MissingDedicationName,
    #[error("Invalid dedication_type. Must be one of: In Honor Of, In Memory Of")]
    InvalidDedicationType,
    #[error("amount is required")]
    MissingAmount,
    #[error("amount must be a number >= 1800 (in cents, minimum $18)")]
    InvalidAmount,
    #[error(
        "Invalid status. Must be one of: pending, approved, scheduled, completed, cancelled"
    )]
    InvalidStatus,
    #[error("No valid fields to update. Allowed: status, assigned_date")]
    NoUpdatableFields,
}
