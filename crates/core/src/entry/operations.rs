use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::error::EntryError;
use super::types::{EntryStatus, MINIMUM_AMOUNT_CENTS};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Checks an address against the `local@domain.tld` shape.
///
/// Loose check: no whitespace, exactly one `@`, and a dot somewhere in
/// the domain part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Parses a donation amount and enforces the minimum.
///
/// Numbers are truncated toward zero. Strings contribute their leading,
/// optionally signed, run of decimal digits (`"2500 cents"` is 2500). Anything
/// else, or a value below [`MINIMUM_AMOUNT_CENTS`], is rejected.
pub fn parse_amount(value: &Value) -> Result<i64, EntryError> {
    let amount = match value {
        Value::Null => return Err(EntryError::MissingAmount),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().and_then(truncate_float),
        },
        Value::String(s) => leading_integer(s),
        _ => None,
    }
    .ok_or(EntryError::InvalidAmount)?;

    if amount < MINIMUM_AMOUNT_CENTS {
        return Err(EntryError::InvalidAmount);
    }
    Ok(amount)
}

fn truncate_float(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    if truncated.is_finite() && truncated.abs() < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Reads the integer prefix of a string, ignoring leading whitespace.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

/// Parses an optional list filter; an empty string means "no filter".
pub fn parse_status_filter(status: Option<&str>) -> Result<Option<EntryStatus>, EntryError> {
    match status {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}
