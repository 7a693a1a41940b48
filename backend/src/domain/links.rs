//! Entities for the vouch-link flow.
//!
//! A [`LinkOwner`] is the row behind a personal share link: a public slug
//! anyone can post to, and a private owner key gating the inbox. A
//! [`Recommendation`] is a free-text suggestion submitted against that link.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ids;

/// Owner of a personal share link.
///
/// The `owner_key` is a bearer secret compared by string equality. It is
/// returned to the caller exactly once, at creation, and must never appear
/// in logs or read responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOwner {
    /// Primary key.
    pub id: Uuid,
    /// Public routing key for the share link.
    pub slug: String,
    /// Private bearer secret for the owner views and mutations.
    pub owner_key: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl LinkOwner {
    /// Mint a new owner with freshly generated identifiers.
    pub fn mint() -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: ids::generate_slug(),
            owner_key: ids::generate_owner_key(),
            created_at: Utc::now(),
        }
    }
}

/// Free-text recommendation submitted against a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Primary key.
    pub id: Uuid,
    /// Owning [`LinkOwner`] id.
    pub user_id: Uuid,
    /// Recommendation text.
    pub body: String,
    /// Optional submitter name.
    pub name: Option<String>,
    /// Optional submitter contact.
    pub contact: Option<String>,
    /// Whether the owner has tried the recommendation.
    pub is_tried: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a third party when submitting a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationDraft {
    /// Recommendation text (required, non-empty).
    pub body: String,
    /// Optional submitter name; blank values are treated as absent.
    pub name: Option<String>,
    /// Optional submitter contact; blank values are treated as absent.
    pub contact: Option<String>,
}

impl Recommendation {
    /// Build a new recommendation for `user_id` from a draft.
    ///
    /// New recommendations always start untried.
    pub fn from_draft(user_id: Uuid, draft: RecommendationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            body: draft.body,
            name: draft.name,
            contact: draft.contact,
            is_tried: false,
            created_at: Utc::now(),
        }
    }
}

/// Credentials presented by a link owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerCredentials {
    /// Public slug of the link.
    pub slug: String,
    /// Private owner key.
    pub owner_key: String,
}
