//! PostgreSQL-backed [`LinkRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{LinkRepository, LinkRepositoryError};
use crate::domain::{LinkOwner, Recommendation};

use super::models::{NewRecommendationRow, NewUserRow, RecommendationRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{recommendations, users};

/// Diesel-backed implementation of the [`LinkRepository`] port.
#[derive(Clone)]
pub struct DieselLinkRepository {
    pool: DbPool,
}

impl DieselLinkRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to link repository errors.
fn map_pool_error(error: PoolError) -> LinkRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            LinkRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to link repository errors.
fn map_diesel_error(error: diesel::result::Error) -> LinkRepositoryError {
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
        DieselError::NotFound => LinkRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            LinkRepositoryError::connection("database connection error")
        }
        _ => LinkRepositoryError::query("database error"),
    }
}

#[async_trait]
impl LinkRepository for DieselLinkRepository {
    async fn insert_owner(&self, owner: &LinkOwner) -> Result<(), LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(owner))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_owner_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::slug.eq(slug))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(LinkOwner::from))
    }

    async fn find_owner_by_credentials(
        &self,
        slug: &str,
        owner_key: &str,
    ) -> Result<Option<LinkOwner>, LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::slug.eq(slug).and(users::owner_key.eq(owner_key)))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(LinkOwner::from))
    }

    async fn insert_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(recommendations::table)
            .values(NewRecommendationRow::from(recommendation))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_recommendations_for_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Recommendation>, LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecommendationRow> = recommendations::table
            .filter(recommendations::user_id.eq(owner_id))
            .order(recommendations::created_at.desc())
            .select(RecommendationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    async fn find_recommendation(
        &self,
        id: Uuid,
    ) -> Result<Option<Recommendation>, LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RecommendationRow> = recommendations::table
            .filter(recommendations::id.eq(id))
            .select(RecommendationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Recommendation::from))
    }

    async fn set_recommendation_tried(
        &self,
        id: Uuid,
        is_tried: bool,
    ) -> Result<(), LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(recommendations::table.filter(recommendations::id.eq(id)))
            .set(recommendations::is_tried.eq(is_tried))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_recommendation(&self, id: Uuid) -> Result<(), LinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(recommendations::table.filter(recommendations::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
