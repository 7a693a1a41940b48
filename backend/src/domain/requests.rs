//! Entities for the request/response flow.
//!
//! A [`BusinessRequest`] is a public, uncredentialed ask for a business
//! recommendation in a location. A [`BusinessResponse`] names a specific
//! business in answer to a request. Both are append-only from the public's
//! perspective.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Public request for a business recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRequest {
    /// Primary key.
    pub id: Uuid,
    /// Location the recommendation should cover.
    pub location: String,
    /// Kind of business sought.
    pub business_type: String,
    /// Optional free-text detail.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    /// Location (required, non-empty).
    pub location: String,
    /// Business type (required, non-empty).
    pub business_type: String,
    /// Optional comment; blank values are treated as absent.
    pub comment: Option<String>,
}

impl BusinessRequest {
    /// Build a new request from a draft.
    pub fn from_draft(draft: RequestDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: draft.location,
            business_type: draft.business_type,
            comment: draft.comment,
            created_at: Utc::now(),
        }
    }
}

/// Optional substring filters for request listings.
///
/// Present filters apply as case-insensitive substring matches against
/// their column and combine with logical AND. Absent filters impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    /// Substring filter on the location column.
    pub location: Option<String>,
    /// Substring filter on the business type column.
    pub business_type: Option<String>,
}

/// Response naming a specific business for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessResponse {
    /// Primary key.
    pub id: Uuid,
    /// Owning [`BusinessRequest`] id.
    pub request_id: Uuid,
    /// Name of the recommended business.
    pub business: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional Instagram handle.
    pub instagram: Option<String>,
    /// Optional website URL.
    pub website: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when responding to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDraft {
    /// Business name (required, non-empty).
    pub business: String,
    /// Optional contact email; blank values are treated as absent.
    pub email: Option<String>,
    /// Optional Instagram handle; blank values are treated as absent.
    pub instagram: Option<String>,
    /// Optional website URL; blank values are treated as absent.
    pub website: Option<String>,
    /// Optional notes; blank values are treated as absent.
    pub notes: Option<String>,
}

impl BusinessResponse {
    /// Build a new response for `request_id` from a draft.
    pub fn from_draft(request_id: Uuid, draft: ResponseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            request_id,
            business: draft.business,
            email: draft.email,
            instagram: draft.instagram,
            website: draft.website,
            notes: draft.notes,
            created_at: Utc::now(),
        }
    }
}
