//! Vouch-link HTTP handlers.
//!
//! ```text
//! POST   /api/v1/links
//! POST   /api/v1/links/{slug}/recommendations
//! GET    /api/v1/links/{slug}/recommendations?ownerKey=…
//! PATCH  /api/v1/links/{slug}/recommendations/{id}
//! DELETE /api/v1/links/{slug}/recommendations/{id}?ownerKey=…
//! ```
//!
//! The owner key travels as a query parameter or request-body field, never
//! as a path segment, and is echoed only by the creation endpoint.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::IssuedLink;
use crate::domain::{Error, OwnerCredentials, Recommendation, RecommendationDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{require_flag, require_text};

/// Response payload for a freshly minted share link.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuedLinkBody {
    /// Public share slug.
    pub slug: String,
    /// Private owner key; revealed here and nowhere else.
    pub owner_key: String,
}

impl From<IssuedLink> for IssuedLinkBody {
    fn from(value: IssuedLink) -> Self {
        Self {
            slug: value.slug,
            owner_key: value.owner_key,
        }
    }
}

/// Request payload for submitting a recommendation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRecommendationBody {
    /// Recommendation text (required).
    pub body: Option<String>,
    /// Optional submitter name.
    pub name: Option<String>,
    /// Optional submitter contact.
    pub contact: Option<String>,
}

/// Response payload for a stored recommendation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBody {
    /// Recommendation id.
    #[schema(format = "uuid")]
    pub id: String,
    /// Recommendation text.
    pub body: String,
    /// Submitter name, when given.
    pub name: Option<String>,
    /// Submitter contact, when given.
    pub contact: Option<String>,
    /// Whether the owner has tried it.
    pub is_tried: bool,
    /// Creation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Recommendation> for RecommendationBody {
    fn from(value: Recommendation) -> Self {
        Self {
            id: value.id.to_string(),
            body: value.body,
            name: value.name,
            contact: value.contact,
            is_tried: value.is_tried,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Owner key carried in the query string of owner-gated reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerKeyQuery {
    /// Private owner key.
    pub owner_key: Option<String>,
}

/// Request payload for toggling the tried flag.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTriedBody {
    /// Private owner key.
    pub owner_key: Option<String>,
    /// Target value of the tried flag.
    pub is_tried: Option<bool>,
}

fn credentials_from(slug: String, owner_key: Option<String>) -> Result<OwnerCredentials, Error> {
    Ok(OwnerCredentials {
        slug,
        owner_key: require_text(owner_key, "ownerKey")?,
    })
}

/// Mint a new share link.
#[utoipa::path(
    post,
    path = "/api/v1/links",
    responses(
        (status = 201, description = "Link minted; the owner key appears only here", body = IssuedLinkBody),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["links"],
    operation_id = "createLink"
)]
#[post("/links")]
pub async fn create_link(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let issued = state.links.create_link().await?;
    Ok(HttpResponse::Created().json(IssuedLinkBody::from(issued)))
}

/// Submit a recommendation against a public slug.
#[utoipa::path(
    post,
    path = "/api/v1/links/{slug}/recommendations",
    request_body = SubmitRecommendationBody,
    params(("slug" = String, Path, description = "Public share slug")),
    responses(
        (status = 201, description = "Recommendation stored", body = RecommendationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown slug", body = ErrorSchema)
    ),
    tags = ["links"],
    operation_id = "submitRecommendation"
)]
#[post("/links/{slug}/recommendations")]
pub async fn submit_recommendation(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
    payload: web::Json<SubmitRecommendationBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let draft = RecommendationDraft {
        body: require_text(payload.body, "body")?,
        name: payload.name,
        contact: payload.contact,
    };

    let recommendation = state
        .links
        .submit_recommendation(slug.as_str(), draft)
        .await?;

    Ok(HttpResponse::Created().json(RecommendationBody::from(recommendation)))
}

/// List the owner's recommendations, newest first.
///
/// A credential mismatch answers 404 rather than 401: listing failures are
/// silent absences, while mutation failures are explicit.
#[utoipa::path(
    get,
    path = "/api/v1/links/{slug}/recommendations",
    params(
        ("slug" = String, Path, description = "Public share slug"),
        ("ownerKey" = String, Query, description = "Private owner key")
    ),
    responses(
        (status = 200, description = "Owner's recommendations, newest first", body = [RecommendationBody]),
        (status = 400, description = "Missing owner key", body = ErrorSchema),
        (status = 404, description = "Slug and owner key do not match", body = ErrorSchema)
    ),
    tags = ["links"],
    operation_id = "listRecommendations"
)]
#[get("/links/{slug}/recommendations")]
pub async fn list_recommendations(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
    query: web::Query<OwnerKeyQuery>,
) -> ApiResult<HttpResponse> {
    let credentials = credentials_from(slug.into_inner(), query.into_inner().owner_key)?;

    let listing = state
        .links
        .list_recommendations(&credentials)
        .await?
        .ok_or_else(|| Error::not_found("link not found"))?;

    let body: Vec<RecommendationBody> = listing.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Set the tried flag on an owned recommendation.
#[utoipa::path(
    patch,
    path = "/api/v1/links/{slug}/recommendations/{id}",
    request_body = ToggleTriedBody,
    params(
        ("slug" = String, Path, description = "Public share slug"),
        ("id" = Uuid, Path, description = "Recommendation id")
    ),
    responses(
        (status = 204, description = "Flag updated"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Ownership check failed", body = ErrorSchema)
    ),
    tags = ["links"],
    operation_id = "toggleTried"
)]
#[patch("/links/{slug}/recommendations/{id}")]
pub async fn toggle_tried(
    state: web::Data<HttpState>,
    path: web::Path<(String, Uuid)>,
    payload: web::Json<ToggleTriedBody>,
) -> ApiResult<HttpResponse> {
    let (slug, recommendation_id) = path.into_inner();
    let payload = payload.into_inner();
    let is_tried = require_flag(payload.is_tried, "isTried")?;
    let credentials = credentials_from(slug, payload.owner_key)?;

    state
        .links
        .toggle_tried(recommendation_id, &credentials, is_tried)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete an owned recommendation.
#[utoipa::path(
    delete,
    path = "/api/v1/links/{slug}/recommendations/{id}",
    params(
        ("slug" = String, Path, description = "Public share slug"),
        ("id" = Uuid, Path, description = "Recommendation id"),
        ("ownerKey" = String, Query, description = "Private owner key")
    ),
    responses(
        (status = 204, description = "Recommendation deleted"),
        (status = 400, description = "Missing owner key", body = ErrorSchema),
        (status = 401, description = "Ownership check failed", body = ErrorSchema)
    ),
    tags = ["links"],
    operation_id = "deleteRecommendation"
)]
#[delete("/links/{slug}/recommendations/{id}")]
pub async fn delete_recommendation(
    state: web::Data<HttpState>,
    path: web::Path<(String, Uuid)>,
    query: web::Query<OwnerKeyQuery>,
) -> ApiResult<HttpResponse> {
    let (slug, recommendation_id) = path.into_inner();
    let credentials = credentials_from(slug, query.into_inner().owner_key)?;

    state
        .links
        .delete_recommendation(recommendation_id, &credentials)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
