//! Driving port for the vouch-link flow.
//!
//! HTTP handlers depend on [`LinkOperations`] rather than on a concrete
//! service so they stay testable without I/O.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, OwnerCredentials, Recommendation, RecommendationDraft};

/// Identifier pair returned exactly once when a link is minted.
///
/// The owner key is a bearer secret: this response is the only place it is
/// ever revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedLink {
    /// Public share slug.
    pub slug: String,
    /// Private owner key.
    pub owner_key: String,
}

/// Operations of the vouch-link flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkOperations: Send + Sync {
    /// Mint a new share link and persist its owner row.
    async fn create_link(&self) -> Result<IssuedLink, Error>;

    /// Submit a recommendation against a public slug.
    async fn submit_recommendation(
        &self,
        slug: &str,
        draft: RecommendationDraft,
    ) -> Result<Recommendation, Error>;

    /// List the owner's recommendations, newest first.
    ///
    /// Returns `None` when the credential pair does not match an owner.
    /// A wrong key and an unknown slug are indistinguishable to the caller.
    async fn list_recommendations(
        &self,
        credentials: &OwnerCredentials,
    ) -> Result<Option<Vec<Recommendation>>, Error>;

    /// Set the tried flag on an owned recommendation.
    async fn toggle_tried(
        &self,
        recommendation_id: Uuid,
        credentials: &OwnerCredentials,
        is_tried: bool,
    ) -> Result<(), Error>;

    /// Delete an owned recommendation.
    async fn delete_recommendation(
        &self,
        recommendation_id: Uuid,
        credentials: &OwnerCredentials,
    ) -> Result<(), Error>;
}
