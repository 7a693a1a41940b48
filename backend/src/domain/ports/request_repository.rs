//! Driven port for request/response persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BusinessRequest, BusinessResponse, RequestFilter};

/// Errors raised by request repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestRepositoryError {
    /// Repository connection could not be established.
    #[error("request repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("request repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl RequestRepositoryError {
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

/// Port for request and response storage.
///
/// Listings order newest first; request filters are case-insensitive
/// substring matches combined with AND.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Persist a new request row.
    async fn insert_request(
        &self,
        request: &BusinessRequest,
    ) -> Result<(), RequestRepositoryError>;

    /// List requests matching the filter, newest first.
    async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Vec<BusinessRequest>, RequestRepositoryError>;

    /// Fetch a single request by id.
    async fn find_request(
        &self,
        id: Uuid,
    ) -> Result<Option<BusinessRequest>, RequestRepositoryError>;

    /// Persist a new response row.
    async fn insert_response(
        &self,
        response: &BusinessResponse,
    ) -> Result<(), RequestRepositoryError>;

    /// List responses for a request, newest first.
    async fn list_responses_for_request(
        &self,
        request_id: Uuid,
    ) -> Result<Vec<BusinessResponse>, RequestRepositoryError>;
}
