//! Request/response domain service.
//!
//! Implements [`RequestBoard`] against a [`RequestRepository`]. Everything
//! here is public and uncredentialed; the service only validates required
//! fields, normalises blank optionals, and checks the owning request row
//! exists before accepting a response.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::{RequestBoard, RequestRepository, RequestRepositoryError};
use crate::domain::text::{is_blank, normalise_optional};
use crate::domain::{
    BusinessRequest, BusinessResponse, Error, RequestDraft, RequestFilter, ResponseDraft,
};

fn map_repository_error(error: RequestRepositoryError) -> Error {
    match error {
        RequestRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("request repository unavailable: {message}"))
        }
        RequestRepositoryError::Query { message } => {
            Error::internal(format!("request repository error: {message}"))
        }
    }
}

fn missing_field(field: &str) -> Error {
    Error::invalid_request(format!("{field} must not be empty")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Service implementing the request/response driving port.
#[derive(Clone)]
pub struct RequestService<R> {
    request_repo: Arc<R>,
}

impl<R> RequestService<R> {
    /// Create a new service with the given repository.
    pub fn new(request_repo: Arc<R>) -> Self {
        Self { request_repo }
    }
}

#[async_trait]
impl<R> RequestBoard for RequestService<R>
where
    R: RequestRepository,
{
    async fn create_request(&self, draft: RequestDraft) -> Result<BusinessRequest, Error> {
        if is_blank(&draft.location) {
            return Err(missing_field("location"));
        }
        if is_blank(&draft.business_type) {
            return Err(missing_field("businessType"));
        }

        let request = BusinessRequest::from_draft(RequestDraft {
            location: draft.location.trim().to_owned(),
            business_type: draft.business_type.trim().to_owned(),
            comment: normalise_optional(draft.comment),
        });

        self.request_repo
            .insert_request(&request)
            .await
            .map_err(map_repository_error)?;

        Ok(request)
    }

    async fn list_requests(&self, filter: RequestFilter) -> Result<Vec<BusinessRequest>, Error> {
        // Blank filters impose no constraint.
        let filter = RequestFilter {
            location: normalise_optional(filter.location),
            business_type: normalise_optional(filter.business_type),
        };

        self.request_repo
            .list_requests(&filter)
            .await
            .map_err(map_repository_error)
    }

    async fn get_request(&self, id: Uuid) -> Result<Option<BusinessRequest>, Error> {
        self.request_repo
            .find_request(id)
            .await
            .map_err(map_repository_error)
    }

    async fn submit_response(
        &self,
        request_id: Uuid,
        draft: ResponseDraft,
    ) -> Result<BusinessResponse, Error> {
        if is_blank(&draft.business) {
            return Err(missing_field("business"));
        }

        self.request_repo
            .find_request(request_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("request not found"))?;

        let response = BusinessResponse::from_draft(
            request_id,
            ResponseDraft {
                business: draft.business.trim().to_owned(),
                email: normalise_optional(draft.email),
                instagram: normalise_optional(draft.instagram),
                website: normalise_optional(draft.website),
                notes: normalise_optional(draft.notes),
            },
        );

        self.request_repo
            .insert_response(&response)
            .await
            .map_err(map_repository_error)?;

        Ok(response)
    }

    async fn list_responses(&self, request_id: Uuid) -> Result<Vec<BusinessResponse>, Error> {
        self.request_repo
            .list_responses_for_request(request_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "request_service_tests.rs"]
mod request_service_tests;
