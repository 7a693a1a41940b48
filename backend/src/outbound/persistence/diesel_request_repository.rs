//! PostgreSQL-backed [`RequestRepository`] implementation using Diesel.
//!
//! Request filters become `ILIKE '%…%'` predicates so matching is
//! case-insensitive; user-supplied filter text is escaped first so `%`,
//! `_`, and `\` match literally.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{RequestRepository, RequestRepositoryError};
use crate::domain::{BusinessRequest, BusinessResponse, RequestFilter};

use super::models::{NewRequestRow, NewResponseRow, RequestRow, ResponseRow};
use super::pool::{DbPool, PoolError};
use super::schema::{requests, responses};

/// Diesel-backed implementation of the [`RequestRepository`] port.
#[derive(Clone)]
pub struct DieselRequestRepository {
    pool: DbPool,
}

impl DieselRequestRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to request repository errors.
fn map_pool_error(error: PoolError) -> RequestRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RequestRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to request repository errors.
fn map_diesel_error(error: diesel::result::Error) -> RequestRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RequestRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RequestRepositoryError::connection("database connection error")
        }
        _ => RequestRepositoryError::query("database error"),
    }
}

/// Escape LIKE metacharacters so filter text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build the `%…%` pattern for a substring filter.
fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

#[async_trait]
impl RequestRepository for DieselRequestRepository {
    async fn insert_request(
        &self,
        request: &BusinessRequest,
    ) -> Result<(), RequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(requests::table)
            .values(NewRequestRow::from(request))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Vec<BusinessRequest>, RequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = requests::table
            .select(RequestRow::as_select())
            .into_boxed();
        if let Some(location) = &filter.location {
            query = query.filter(requests::location.ilike(contains_pattern(location)));
        }
        if let Some(business_type) = &filter.business_type {
            query = query.filter(requests::business_type.ilike(contains_pattern(business_type)));
        }

        let rows: Vec<RequestRow> = query
            .order(requests::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(BusinessRequest::from).collect())
    }

    async fn find_request(
        &self,
        id: Uuid,
    ) -> Result<Option<BusinessRequest>, RequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RequestRow> = requests::table
            .filter(requests::id.eq(id))
            .select(RequestRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(BusinessRequest::from))
    }

    async fn insert_response(
        &self,
        response: &BusinessResponse,
    ) -> Result<(), RequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(responses::table)
            .values(NewResponseRow::from(response))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_responses_for_request(
        &self,
        request_id: Uuid,
    ) -> Result<Vec<BusinessResponse>, RequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ResponseRow> = responses::table
            .filter(responses::request_id.eq(request_id))
            .order(responses::created_at.desc())
            .select(ResponseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(BusinessResponse::from).collect())
    }
}
