//! Vouch-link domain service.
//!
//! Implements [`LinkOperations`] against a [`LinkRepository`]. This is
//! where the ownership gate lives: every mutation re-resolves the
//! credential pair and then independently checks that the target
//! recommendation belongs to the authenticated owner.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{IssuedLink, LinkOperations, LinkRepository, LinkRepositoryError};
use crate::domain::text::{is_blank, normalise_optional};
use crate::domain::{Error, LinkOwner, OwnerCredentials, Recommendation, RecommendationDraft};

fn map_repository_error(error: LinkRepositoryError) -> Error {
    match error {
        LinkRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("link repository unavailable: {message}"))
        }
        LinkRepositoryError::Query { message } => {
            Error::internal(format!("link repository error: {message}"))
        }
    }
}

/// Service implementing the vouch-link driving port.
#[derive(Clone)]
pub struct LinkService<R> {
    link_repo: Arc<R>,
}

impl<R> LinkService<R> {
    /// Create a new service with the given repository.
    pub fn new(link_repo: Arc<R>) -> Self {
        Self { link_repo }
    }
}

impl<R> LinkService<R>
where
    R: LinkRepository,
{
    /// Resolve the credential pair to an owner, or fail `Unauthorized`.
    async fn authenticate(&self, credentials: &OwnerCredentials) -> Result<LinkOwner, Error> {
        self.link_repo
            .find_owner_by_credentials(&credentials.slug, &credentials.owner_key)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::unauthorized("owner key does not match this link"))
    }

    /// Fetch the recommendation and check it belongs to `owner`.
    ///
    /// The ownership comparison is a second, independent check: a valid
    /// credential pair for one link must not authorise mutations against
    /// another owner's recommendation id. A missing row reports
    /// `Unauthorized` as well, indistinguishable from a foreign one.
    async fn authorise_recommendation(
        &self,
        owner: &LinkOwner,
        recommendation_id: Uuid,
    ) -> Result<Recommendation, Error> {
        let recommendation = self
            .link_repo
            .find_recommendation(recommendation_id)
            .await
            .map_err(map_repository_error)?;

        match recommendation {
            Some(recommendation) if recommendation.user_id == owner.id => Ok(recommendation),
            _ => Err(Error::unauthorized(
                "recommendation does not belong to this link",
            )),
        }
    }
}

#[async_trait]
impl<R> LinkOperations for LinkService<R>
where
    R: LinkRepository,
{
    async fn create_link(&self) -> Result<IssuedLink, Error> {
        let owner = LinkOwner::mint();

        self.link_repo
            .insert_owner(&owner)
            .await
            .map_err(map_repository_error)?;

        // Log the slug only; the owner key must never reach log output.
        info!(slug = %owner.slug, "share link minted");

        Ok(IssuedLink {
            slug: owner.slug,
            owner_key: owner.owner_key,
        })
    }

    async fn submit_recommendation(
        &self,
        slug: &str,
        draft: RecommendationDraft,
    ) -> Result<Recommendation, Error> {
        if is_blank(&draft.body) {
            return Err(
                Error::invalid_request("body must not be empty").with_details(json!({
                    "field": "body",
                    "code": "missing_field",
                })),
            );
        }

        let owner = self
            .link_repo
            .find_owner_by_slug(slug)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("link not found"))?;

        let recommendation = Recommendation::from_draft(
            owner.id,
            RecommendationDraft {
                body: draft.body.trim().to_owned(),
                name: normalise_optional(draft.name),
                contact: normalise_optional(draft.contact),
            },
        );

        self.link_repo
            .insert_recommendation(&recommendation)
            .await
            .map_err(map_repository_error)?;

        Ok(recommendation)
    }

    async fn list_recommendations(
        &self,
        credentials: &OwnerCredentials,
    ) -> Result<Option<Vec<Recommendation>>, Error> {
        let owner = self
            .link_repo
            .find_owner_by_credentials(&credentials.slug, &credentials.owner_key)
            .await
            .map_err(map_repository_error)?;

        // A mismatched pair is a silent absence, not an error: the caller
        // sees the same result for a wrong key and an unknown slug.
        let Some(owner) = owner else {
            return Ok(None);
        };

        let recommendations = self
            .link_repo
            .list_recommendations_for_owner(owner.id)
            .await
            .map_err(map_repository_error)?;

        Ok(Some(recommendations))
    }

    async fn toggle_tried(
        &self,
        recommendation_id: Uuid,
        credentials: &OwnerCredentials,
        is_tried: bool,
    ) -> Result<(), Error> {
        let owner = self.authenticate(credentials).await?;
        self.authorise_recommendation(&owner, recommendation_id)
            .await?;

        self.link_repo
            .set_recommendation_tried(recommendation_id, is_tried)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_recommendation(
        &self,
        recommendation_id: Uuid,
        credentials: &OwnerCredentials,
    ) -> Result<(), Error> {
        let owner = self.authenticate(credentials).await?;
        self.authorise_recommendation(&owner, recommendation_id)
            .await?;

        self.link_repo
            .delete_recommendation(recommendation_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "link_service_tests.rs"]
mod link_service_tests;
