//! Presence and coercion checks shared by every service.
//!
//! Request fields arrive as `Option<String>`; a value that is missing or
//! blank counts as absent.

use crate::errors::ServiceError;

/// The trimmed-nonblank value of an optional field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Check that every named field is present, reporting all missing ones at once
/// in declaration order.
pub fn require_fields<'a, const N: usize>(
    fields: [(&'static str, &'a Option<String>); N],
) -> Result<[&'a str; N], ServiceError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| present(v).is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!("Missing required fields: {}", missing.join(", "))));
    }
    Ok(fields.map(|(_, v)| present(v).unwrap_or_default()))
}

/// Parse an optional integer field; blank is treated as absent.
pub fn optional_int(name: &str, value: &Option<String>) -> Result<Option<i64>, ServiceError> {
    present(value).map(|raw| parse_int(name, raw)).transpose()
}

/// Parse an already-required integer field.
pub fn parse_int(name: &str, raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ServiceError::Validation(format!("{name} must be an integer")))
}

/// The field's value, or `default` when absent.
pub fn or_default(value: &Option<String>, default: &str) -> String {
    present(value).unwrap_or(default).to_string()
}
