//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Build the standard missing-field error for `field`.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("{field} must not be empty")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Require a non-blank text field, trimming surrounding whitespace.
pub(crate) fn require_text(value: Option<String>, field: &'static str) -> Result<String, Error> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Require a boolean field to be present.
pub(crate) fn require_flag(value: Option<bool>, field: &'static str) -> Result<bool, Error> {
    value.ok_or_else(|| missing_field_error(field))
}
