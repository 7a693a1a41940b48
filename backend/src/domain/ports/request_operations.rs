//! Driving port for the request/response flow.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    BusinessRequest, BusinessResponse, Error, RequestDraft, RequestFilter, ResponseDraft,
};

/// Operations of the request/response flow. No authorization gate exists
/// here: anyone holding the link may view and respond.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestBoard: Send + Sync {
    /// Create a public request and return the stored row.
    async fn create_request(&self, draft: RequestDraft) -> Result<BusinessRequest, Error>;

    /// List requests matching the optional filters, newest first.
    async fn list_requests(&self, filter: RequestFilter) -> Result<Vec<BusinessRequest>, Error>;

    /// Fetch a request by id; `None` when the row does not exist.
    async fn get_request(&self, id: Uuid) -> Result<Option<BusinessRequest>, Error>;

    /// Submit a response to an existing request.
    async fn submit_response(
        &self,
        request_id: Uuid,
        draft: ResponseDraft,
    ) -> Result<BusinessResponse, Error>;

    /// List responses for a request, newest first.
    async fn list_responses(&self, request_id: Uuid) -> Result<Vec<BusinessResponse>, Error>;
}
