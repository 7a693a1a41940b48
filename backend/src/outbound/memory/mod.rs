//! In-memory repository adapters.
//!
//! Back the server when no database is configured and the HTTP integration
//! tests. Rows live in `Mutex<Vec<_>>` stores; listings mirror the SQL
//! adapters (newest first, case-insensitive substring filters).

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    LinkRepository, LinkRepositoryError, RequestRepository, RequestRepositoryError,
};
use crate::domain::{BusinessRequest, BusinessResponse, LinkOwner, Recommendation, RequestFilter};

fn case_insensitive_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// In-memory implementation of the [`LinkRepository`] port.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    owners: Mutex<Vec<LinkOwner>>,
    recommendations: Mutex<Vec<Recommendation>>,
}

impl InMemoryLinkRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn owners(&self) -> Result<std::sync::MutexGuard<'_, Vec<LinkOwner>>, LinkRepositoryError> {
        self.owners
            .lock()
            .map_err(|_| LinkRepositoryError::query("owner store mutex poisoned"))
    }

    fn recommendations(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<Recommendation>>, LinkRepositoryError> {
        self.recommendations
            .lock()
            .map_err(|_| LinkRepositoryError::query("recommendation store mutex poisoned"))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_owner(&self, owner: &LinkOwner) -> Result<(), LinkRepositoryError> {
        self.owners()?.push(owner.clone());
        Ok(())
    }

    async fn find_owner_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError> {
        Ok(self
            .owners()?
            .iter()
            .find(|owner| owner.slug == slug)
            .cloned())
    }

    async fn find_owner_by_credentials(
        &self,
        slug: &str,
        owner_key: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError> {
        Ok(self
            .owners()?
            .iter()
            .find(|owner| owner.slug == slug && owner.owner_key == owner_key)
            .cloned())
    }

    async fn insert_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), LinkRepositoryError> {
        self.recommendations()?.push(recommendation.clone());
        Ok(())
    }

    async fn list_recommendations_for_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Recommendation>, LinkRepositoryError> {
        let store = self.recommendations()?;
        // Reverse insertion order first so equal timestamps still list
        // newest insert first after the stable sort.
        let mut listing: Vec<Recommendation> = store
            .iter()
            .rev()
            .filter(|recommendation| recommendation.user_id == owner_id)
            .cloned()
            .collect();
        listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listing)
    }

    async fn find_recommendation(
        &self,
        id: Uuid,
    ) -> Result<Option<Recommendation>, LinkRepositoryError> {
        Ok(self
            .recommendations()?
            .iter()
            .find(|recommendation| recommendation.id == id)
            .cloned())
    }

    async fn set_recommendation_tried(
        &self,
        id: Uuid,
        is_tried: bool,
    ) -> Result<(), LinkRepositoryError> {
        let mut store = self.recommendations()?;
        if let Some(recommendation) = store.iter_mut().find(|recommendation| recommendation.id == id)
        {
            recommendation.is_tried = is_tried;
        }
        Ok(())
    }

    async fn delete_recommendation(&self, id: Uuid) -> Result<(), LinkRepositoryError> {
        self.recommendations()?
            .retain(|recommendation| recommendation.id != id);
        Ok(())
    }
}

/// In-memory implementation of the [`RequestRepository`] port.
#[derive(Default)]
pub struct InMemoryRequestRepository {
    requests: Mutex<Vec<BusinessRequest>>,
    responses: Mutex<Vec<BusinessResponse>>,
}

impl InMemoryRequestRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn requests(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<BusinessRequest>>, RequestRepositoryError> {
        self.requests
            .lock()
            .map_err(|_| RequestRepositoryError::query("request store mutex poisoned"))
    }

    fn responses(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<BusinessResponse>>, RequestRepositoryError> {
        self.responses
            .lock()
            .map_err(|_| RequestRepositoryError::query("response store mutex poisoned"))
    }
}

fn matches_filter(request: &BusinessRequest, filter: &RequestFilter) -> bool {
    let location_ok = filter
        .location
        .as_deref()
        .is_none_or(|needle| case_insensitive_contains(&request.location, needle));
    let business_type_ok = filter
        .business_type
        .as_deref()
        .is_none_or(|needle| case_insensitive_contains(&request.business_type, needle));
    location_ok && business_type_ok
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn insert_request(
        &self,
        request: &BusinessRequest,
    ) -> Result<(), RequestRepositoryError> {
        self.requests()?.push(request.clone());
        Ok(())
    }

    async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Vec<BusinessRequest>, RequestRepositoryError> {
        let store = self.requests()?;
        let mut listing: Vec<BusinessRequest> = store
            .iter()
            .rev()
            .filter(|request| matches_filter(request, filter))
            .cloned()
            .collect();
        listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listing)
    }

    async fn find_request(
        &self,
        id: Uuid,
    ) -> Result<Option<BusinessRequest>, RequestRepositoryError> {
        Ok(self
            .requests()?
            .iter()
            .find(|request| request.id == id)
            .cloned())
    }

    async fn insert_response(
        &self,
        response: &BusinessResponse,
    ) -> Result<(), RequestRepositoryError> {
        self.responses()?.push(response.clone());
        Ok(())
    }

    async fn list_responses_for_request(
        &self,
        request_id: Uuid,
    ) -> Result<Vec<BusinessResponse>, RequestRepositoryError> {
        let store = self.responses()?;
        let mut listing: Vec<BusinessResponse> = store
            .iter()
            .rev()
            .filter(|response| response.request_id == request_id)
            .cloned()
            .collect();
        listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listing)
    }
}
