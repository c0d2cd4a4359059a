//! SQLite schema definitions and SQL query constants.
//!
//! Pure data and string assembly, no I/O.

use dedications_core::entry::EntryPatch;

/// Journal mode requested on every connection.
pub const JOURNAL_MODE: &str = "WAL";

/// SQL statement to create the entries table and its indexes.
///
/// Safe to run on every start: existing tables and rows are left alone.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sponsor_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    dedication_type TEXT NOT NULL DEFAULT 'In Honor Of'
        CHECK (dedication_type IN ('In Honor Of', 'In Memory Of')),
    dedication_name TEXT NOT NULL,
    occasion TEXT,
    message TEXT,
    preferred_date TEXT,
    assigned_date TEXT,
    amount INTEGER NOT NULL CHECK (amount >= 1800),
    status TEXT NOT NULL DEFAULT 'pending'
        CHECK (status IN ('pending', 'approved', 'scheduled', 'completed', 'cancelled')),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_entries_status ON entries(status);
CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at);
"#;

pub const SELECT_ENTRIES: &str = r#"
SELECT id, sponsor_name, email, phone, dedication_type, dedication_name, occasion, message,
       preferred_date, assigned_date, amount, status, created_at, updated_at
FROM entries
ORDER BY julianday(created_at) DESC, id DESC
"#;

pub const SELECT_ENTRIES_BY_STATUS: &str = r#"
SELECT id, sponsor_name, email, phone, dedication_type, dedication_name, occasion, message,
       preferred_date, assigned_date, amount, status, created_at, updated_at
FROM entries
WHERE status = ?1
ORDER BY julianday(created_at) DESC, id DESC
"#;

pub const SELECT_ENTRY_BY_ID: &str = r#"
SELECT id, sponsor_name, email, phone, dedication_type, dedication_name, occasion, message,
       preferred_date, assigned_date, amount, status, created_at, updated_at
FROM entries
WHERE id = ?1
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries
    (sponsor_name, email, phone, dedication_type, dedication_name, occasion, message,
     preferred_date, amount, status, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
RETURNING id, sponsor_name, email, phone, dedication_type, dedication_name, occasion, message,
          preferred_date, assigned_date, amount, status, created_at, updated_at
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

/// Builds the UPDATE statement for a partial update.
///
/// Only the columns present in the patch are assigned; `updated_at` always is.
/// Parameters are named (`:id`, `:status`, `:assigned_date`, `:updated_at`)
/// and only those referenced by the statement may be bound.
pub fn update_entry_sql(patch: &EntryPatch) -> String {
    let mut assignments = Vec::with_capacity(3);
    if patch.status.is_some() {
        assignments.push("status = :status");
    }
    if patch.assigned_date.is_some() {
        assignments.push("assigned_date = :assigned_date");
    }
    assignments.push("updated_at = :updated_at");

    format!(
        "UPDATE entries SET {} WHERE id = :id \
         RETURNING id, sponsor_name, email, phone, dedication_type, dedication_name, occasion, \
         message, preferred_date, assigned_date, amount, status, created_at, updated_at",
        assignments.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dedications_core::entry::EntryStatus;

    fn patch(status: Option<EntryStatus>, assigned_date: Option<Option<String>>) -> EntryPatch {
        EntryPatch {
            status,
            assigned_date,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS entries"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
        assert!(!CREATE_TABLES.contains("DROP"));
    }

    #[test]
    fn test_list_queries_order_newest_first() {
        assert!(SELECT_ENTRIES.contains("ORDER BY julianday(created_at) DESC, id DESC"));
        assert!(SELECT_ENTRIES_BY_STATUS.contains("WHERE status = ?1"));
    }

    #[test]
    fn test_update_sql_status_only() {
        let sql = update_entry_sql(&patch(Some(EntryStatus::Approved), None));
        assert!(sql.starts_with("UPDATE entries SET status = :status, updated_at = :updated_at WHERE id = :id"));
        assert!(!sql.contains(":assigned_date"));
    }

    #[test]
    fn test_update_sql_assigned_date_only() {
        let sql = update_entry_sql(&patch(None, Some(Some("2025-03-01".to_string()))));
        assert!(sql.starts_with(
            "UPDATE entries SET assigned_date = :assigned_date, updated_at = :updated_at WHERE id = :id"
        ));
        assert!(!sql.contains(":status"));
    }

    #[test]
    fn test_update_sql_both_fields() {
        let sql = update_entry_sql(&patch(Some(EntryStatus::Scheduled), Some(None)));
        assert!(sql.contains(
            "SET status = :status, assigned_date = :assigned_date, updated_at = :updated_at"
        ));
        assert!(sql.contains("RETURNING id"));
    }
}
