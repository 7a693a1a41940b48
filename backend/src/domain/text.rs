//! Text normalisation shared by the domain services.
//!
//! Required fields must be non-empty after trimming; blank optional fields
//! are normalised to an explicit absence, never stored as empty strings.

/// Return `true` when `value` is empty after trimming.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trim an optional field and collapse blank values to `None`.
pub(crate) fn normalise_optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
