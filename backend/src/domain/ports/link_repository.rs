//! Driven port for share-link persistence.
//!
//! Adapters implement [`LinkRepository`] to store link owners and their
//! recommendations. Every operation is a single point lookup, insert,
//! field update, or delete; listings order newest first.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{LinkOwner, Recommendation};

/// Errors raised by link repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkRepositoryError {
    /// Repository connection could not be established.
    #[error("link repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("link repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl LinkRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for link owner and recommendation storage.
///
/// Credential resolution is a bearer-secret string comparison: a
/// `(slug, owner_key)` pair must jointly match exactly one owner row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persist a freshly minted owner row.
    async fn insert_owner(&self, owner: &LinkOwner) -> Result<(), LinkRepositoryError>;

    /// Look up an owner by public slug alone.
    async fn find_owner_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError>;

    /// Look up an owner by the `(slug, owner_key)` credential pair.
    async fn find_owner_by_credentials(
        &self,
        slug: &str,
        owner_key: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError>;

    /// Persist a new recommendation row.
    async fn insert_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), LinkRepositoryError>;

    /// List an owner's recommendations, newest first.
    async fn list_recommendations_for_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Recommendation>, LinkRepositoryError>;

    /// Fetch a single recommendation by id.
    async fn find_recommendation(
        &self,
        id: Uuid,
    ) -> Result<Option<Recommendation>, LinkRepositoryError>;

    /// Set the tried flag on a recommendation.
    async fn set_recommendation_tried(
        &self,
        id: Uuid,
        is_tried: bool,
    ) -> Result<(), LinkRepositoryError>;

    /// Delete a recommendation by id.
    async fn delete_recommendation(&self, id: Uuid) -> Result<(), LinkRepositoryError>;
}
