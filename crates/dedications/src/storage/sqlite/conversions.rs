//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::{types::Type, Row};

use dedications_core::entry::{DedicationType, Entry, EntryStatus};

/// Timestamp layout written by `datetime('now')` column defaults.
const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a SQLite row to an Entry.
///
/// Expected columns: id, sponsor_name, email, phone, dedication_type,
/// dedication_name, occasion, message, preferred_date, assigned_date, amount,
/// status, created_at, updated_at
pub fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    let dedication_type: String = row.get(4)?;
    let status: String = row.get(11)?;
    let created_at: String = row.get(12)?;
    let updated_at: String = row.get(13)?;

    Ok(Entry {
        id: row.get(0)?,
        sponsor_name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        dedication_type: parse_column(4, &dedication_type)?,
        dedication_name: row.get(5)?,
        occasion: row.get(6)?,
        message: row.get(7)?,
        preferred_date: row.get(8)?,
        assigned_date: row.get(9)?,
        amount: row.get(10)?,
        status: parse_column::<EntryStatus>(11, &status)?,
        created_at: parse_datetime(12, &created_at)?,
        updated_at: parse_datetime(13, &updated_at)?,
    })
}

/// Parse an enum column through its `FromStr` implementation.
fn parse_column<T>(idx: usize, s: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (written by this service) and the bare
/// `YYYY-MM-DD HH:MM:SS` UTC form produced by SQLite's `datetime('now')`.
fn parse_datetime(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, SQLITE_DATETIME_FORMAT).map(|dt| dt.and_utc())
        })
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width RFC 3339 with microseconds. Listing sorts through
/// `julianday()`, so these and the legacy layout order together.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Storage representation of a dedication type.
pub fn dedication_type_to_string(kind: DedicationType) -> &'static str {
    kind.as_str()
}

/// Storage representation of a status.
pub fn status_to_string(status: EntryStatus) -> &'static str {
    status.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00.000000Z");
    }

    #[test]
    fn test_formatted_timestamps_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn test_parse_datetime_rfc3339() {
        let parsed = parse_datetime(0, "2024-06-15T10:30:00.000123Z").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
                + chrono::Duration::microseconds(123)
        );
    }

    #[test]
    fn test_parse_datetime_sqlite_default_format() {
        let parsed = parse_datetime(0, "2024-06-15 10:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(12, "yesterday").is_err());
    }

    #[test]
    fn test_parse_status_column() {
        assert_eq!(
            parse_column::<EntryStatus>(11, "completed").unwrap(),
            EntryStatus::Completed
        );
        let err = parse_column::<EntryStatus>(11, "archived").unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(11, Type::Text, _)
        ));
    }

    #[test]
    fn test_enum_storage_strings() {
        assert_eq!(
            dedication_type_to_string(DedicationType::InMemoryOf),
            "In Memory Of"
        );
        assert_eq!(status_to_string(EntryStatus::Pending), "pending");
    }
}
