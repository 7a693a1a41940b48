//! OpenAPI schema wrappers for domain types.
//!
//! These mirror the serialised shape of domain payloads without coupling
//! the domain layer to utoipa.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// OpenAPI mirror of the domain error envelope.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable snake_case error code.
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-readable message.
    #[schema(example = "body must not be empty")]
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
