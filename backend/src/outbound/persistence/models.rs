//! Diesel row types for the vouch schema.
//!
//! Read rows are `Queryable`/`Selectable` structs converted into domain
//! entities by the repository adapters. Insert rows borrow from the domain
//! entity so inserts never clone string fields.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{BusinessRequest, BusinessResponse, LinkOwner, Recommendation};

use super::schema::{recommendations, requests, responses, users};

/// Read row for a link owner.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub slug: String,
    pub owner_key: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for LinkOwner {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            owner_key: row.owner_key,
            created_at: row.created_at,
        }
    }
}

/// Insert row for a link owner.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: Uuid,
    pub slug: &'a str,
    pub owner_key: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a LinkOwner> for NewUserRow<'a> {
    fn from(owner: &'a LinkOwner) -> Self {
        Self {
            id: owner.id,
            slug: &owner.slug,
            owner_key: &owner.owner_key,
            created_at: owner.created_at,
        }
    }
}

/// Read row for a recommendation.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = recommendations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub is_tried: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RecommendationRow> for Recommendation {
    fn from(row: RecommendationRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            body: row.body,
            name: row.name,
            contact: row.contact,
            is_tried: row.is_tried,
            created_at: row.created_at,
        }
    }
}

/// Insert row for a recommendation.
#[derive(Debug, Insertable)]
#[diesel(table_name = recommendations)]
pub struct NewRecommendationRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: &'a str,
    pub name: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub is_tried: bool,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Recommendation> for NewRecommendationRow<'a> {
    fn from(recommendation: &'a Recommendation) -> Self {
        Self {
            id: recommendation.id,
            user_id: recommendation.user_id,
            body: &recommendation.body,
            name: recommendation.name.as_deref(),
            contact: recommendation.contact.as_deref(),
            is_tried: recommendation.is_tried,
            created_at: recommendation.created_at,
        }
    }
}

/// Read row for a business request.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RequestRow {
    pub id: Uuid,
    pub location: String,
    pub business_type: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RequestRow> for BusinessRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            id: row.id,
            location: row.location,
            business_type: row.business_type,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

/// Insert row for a business request.
#[derive(Debug, Insertable)]
#[diesel(table_name = requests)]
pub struct NewRequestRow<'a> {
    pub id: Uuid,
    pub location: &'a str,
    pub business_type: &'a str,
    pub comment: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a BusinessRequest> for NewRequestRow<'a> {
    fn from(request: &'a BusinessRequest) -> Self {
        Self {
            id: request.id,
            location: &request.location,
            business_type: &request.business_type,
            comment: request.comment.as_deref(),
            created_at: request.created_at,
        }
    }
}

/// Read row for a business response.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = responses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResponseRow {
    pub id: Uuid,
    pub request_id: Uuid,
    pub business: String,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ResponseRow> for BusinessResponse {
    fn from(row: ResponseRow) -> Self {
        Self {
            id: row.id,
            request_id: row.request_id,
            business: row.business,
            email: row.email,
            instagram: row.instagram,
            website: row.website,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

/// Insert row for a business response.
#[derive(Debug, Insertable)]
#[diesel(table_name = responses)]
pub struct NewResponseRow<'a> {
    pub id: Uuid,
    pub request_id: Uuid,
    pub business: &'a str,
    pub email: Option<&'a str>,
    pub instagram: Option<&'a str>,
    pub website: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a BusinessResponse> for NewResponseRow<'a> {
    fn from(response: &'a BusinessResponse) -> Self {
        Self {
            id: response.id,
            request_id: response.request_id,
            business: &response.business,
            email: response.email.as_deref(),
            instagram: response.instagram.as_deref(),
            website: response.website.as_deref(),
            notes: response.notes.as_deref(),
            created_at: response.created_at,
        }
    }
}
