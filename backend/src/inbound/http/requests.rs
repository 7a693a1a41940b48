//! Request/response board HTTP handlers.
//!
//! ```text
//! POST /api/v1/requests
//! GET  /api/v1/requests?location=…&businessType=…
//! GET  /api/v1/requests/{id}
//! POST /api/v1/requests/{id}/responses
//! GET  /api/v1/requests/{id}/responses
//! ```
//!
//! The board is fully public. No credential guards any endpoint here.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    BusinessRequest, BusinessResponse, Error, RequestDraft, RequestFilter, ResponseDraft,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_text;

/// Request payload for creating a business request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    /// Location the recommendation should cover (required).
    pub location: Option<String>,
    /// Kind of business sought (required).
    pub business_type: Option<String>,
    /// Optional free-text detail.
    pub comment: Option<String>,
}

/// Response payload for a stored business request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRequestBody {
    /// Request id.
    #[schema(format = "uuid")]
    pub id: String,
    /// Location the recommendation should cover.
    pub location: String,
    /// Kind of business sought.
    pub business_type: String,
    /// Free-text detail, when given.
    pub comment: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<BusinessRequest> for BusinessRequestBody {
    fn from(value: BusinessRequest) -> Self {
        Self {
            id: value.id.to_string(),
            location: value.location,
            business_type: value.business_type,
            comment: value.comment,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Optional substring filters on the request listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListQuery {
    /// Substring filter on location.
    pub location: Option<String>,
    /// Substring filter on business type.
    pub business_type: Option<String>,
}

/// Request payload for responding to a business request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseBody {
    /// Name of the recommended business (required).
    pub business: Option<String>,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional Instagram handle.
    pub instagram: Option<String>,
    /// Optional website URL.
    pub website: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Response payload for a stored business response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponseBody {
    /// Response id.
    #[schema(format = "uuid")]
    pub id: String,
    /// Owning request id.
    #[schema(format = "uuid")]
    pub request_id: String,
    /// Name of the recommended business.
    pub business: String,
    /// Contact email, when given.
    pub email: Option<String>,
    /// Instagram handle, when given.
    pub instagram: Option<String>,
    /// Website URL, when given.
    pub website: Option<String>,
    /// Free-text notes, when given.
    pub notes: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<BusinessResponse> for BusinessResponseBody {
    fn from(value: BusinessResponse) -> Self {
        Self {
            id: value.id.to_string(),
            request_id: value.request_id.to_string(),
            business: value.business,
            email: value.email,
            instagram: value.instagram,
            website: value.website,
            notes: value.notes,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Create a public business request.
#[utoipa::path(
    post,
    path = "/api/v1/requests",
    request_body = CreateRequestBody,
    responses(
        (status = 201, description = "Request created", body = BusinessRequestBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "createRequest"
)]
#[post("/requests")]
pub async fn create_request(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRequestBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let draft = RequestDraft {
        location: require_text(payload.location, "location")?,
        business_type: require_text(payload.business_type, "businessType")?,
        comment: payload.comment,
    };

    let request = state.requests.create_request(draft).await?;
    Ok(HttpResponse::Created().json(BusinessRequestBody::from(request)))
}

/// List business requests, newest first, with optional substring filters.
#[utoipa::path(
    get,
    path = "/api/v1/requests",
    params(
        ("location" = Option<String>, Query, description = "Case-insensitive substring filter on location"),
        ("businessType" = Option<String>, Query, description = "Case-insensitive substring filter on business type")
    ),
    responses(
        (status = 200, description = "Matching requests, newest first", body = [BusinessRequestBody]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "listRequests"
)]
#[get("/requests")]
pub async fn list_requests(
    state: web::Data<HttpState>,
    query: web::Query<RequestListQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = RequestFilter {
        location: query.location,
        business_type: query.business_type,
    };

    let listing = state.requests.list_requests(filter).await?;
    let body: Vec<BusinessRequestBody> = listing.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Fetch a single business request by id.
#[utoipa::path(
    get,
    path = "/api/v1/requests/{id}",
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 200, description = "The request", body = BusinessRequestBody),
        (status = 404, description = "Unknown request", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "getRequest"
)]
#[get("/requests/{id}")]
pub async fn get_request(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let request = state
        .requests
        .get_request(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("request not found"))?;

    Ok(HttpResponse::Ok().json(BusinessRequestBody::from(request)))
}

/// Respond to an existing business request.
#[utoipa::path(
    post,
    path = "/api/v1/requests/{id}/responses",
    request_body = SubmitResponseBody,
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 201, description = "Response stored", body = BusinessResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown request", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "submitResponse"
)]
#[post("/requests/{id}/responses")]
pub async fn submit_response(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<SubmitResponseBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let draft = ResponseDraft {
        business: require_text(payload.business, "business")?,
        email: payload.email,
        instagram: payload.instagram,
        website: payload.website,
        notes: payload.notes,
    };

    let response = state
        .requests
        .submit_response(id.into_inner(), draft)
        .await?;

    Ok(HttpResponse::Created().json(BusinessResponseBody::from(response)))
}

/// List the responses to a business request, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/requests/{id}/responses",
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 200, description = "Responses, newest first", body = [BusinessResponseBody]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "listResponses"
)]
#[get("/requests/{id}/responses")]
pub async fn list_responses(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let listing = state.requests.list_responses(id.into_inner()).await?;
    let body: Vec<BusinessResponseBody> = listing.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockLinkOperations, MockRequestBoard};
    use actix_web::{App, http::StatusCode, test as actix_test};
    use chrono::Utc;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app(
        requests: MockRequestBoard,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(Arc::new(MockLinkOperations::new()), Arc::new(requests));
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(create_request)
                .service(list_requests)
                .service(get_request)
                .service(submit_response)
                .service(list_responses),
        )
    }

    fn sample_request() -> BusinessRequest {
        BusinessRequest {
            id: Uuid::new_v4(),
            location: "Lisbon".to_owned(),
            business_type: "plumber".to_owned(),
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[actix_rt::test]
    async fn create_request_returns_created_with_the_stored_row() {
        let stored = sample_request();
        let expected_id = stored.id.to_string();
        let mut requests = MockRequestBoard::new();
        requests
            .expect_create_request()
            .times(1)
            .withf(|draft| draft.location == "Lisbon" && draft.business_type == "plumber")
            .return_once(move |_| Ok(stored));

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/requests")
            .set_json(json!({ "location": "Lisbon", "businessType": "plumber" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("id").and_then(Value::as_str),
            Some(expected_id.as_str())
        );
    }

    #[actix_rt::test]
    async fn create_request_rejects_missing_location_before_the_port() {
        let mut requests = MockRequestBoard::new();
        requests.expect_create_request().times(0);

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/requests")
            .set_json(json!({ "businessType": "plumber" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value
                .get("details")
                .and_then(|details| details.get("field"))
                .and_then(Value::as_str),
            Some("location")
        );
    }

    #[actix_rt::test]
    async fn list_requests_forwards_query_filters() {
        let mut requests = MockRequestBoard::new();
        requests
            .expect_list_requests()
            .times(1)
            .withf(|filter| {
                filter.location.as_deref() == Some("lis")
                    && filter.business_type.as_deref() == Some("plum")
            })
            .return_once(|_| Ok(Vec::new()));

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/requests?location=lis&businessType=plum")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn get_request_answers_not_found_for_unknown_ids() {
        let mut requests = MockRequestBoard::new();
        requests
            .expect_get_request()
            .times(1)
            .return_once(|_| Ok(None));

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/requests/{}", Uuid::new_v4()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("request not found")
        );
    }

    #[actix_rt::test]
    async fn submit_response_requires_the_business_name() {
        let mut requests = MockRequestBoard::new();
        requests.expect_submit_response().times(0);

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/v1/requests/{}/responses", Uuid::new_v4()))
            .set_json(json!({ "email": "ana@example.com" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn list_responses_serialises_stored_rows() {
        let request_id = Uuid::new_v4();
        let row = BusinessResponse {
            id: Uuid::new_v4(),
            request_id,
            business: "Canal Pros".to_owned(),
            email: None,
            instagram: Some("@canalpros".to_owned()),
            website: None,
            notes: None,
            created_at: Utc::now(),
        };
        let mut requests = MockRequestBoard::new();
        requests
            .expect_list_responses()
            .times(1)
            .withf(move |id| *id == request_id)
            .return_once(move |_| Ok(vec![row]));

        let app = actix_test::init_service(test_app(requests)).await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/requests/{request_id}/responses"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        let rows = value.as_array().expect("array body");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("business").and_then(Value::as_str),
            Some("Canal Pros")
        );
        assert_eq!(
            rows[0].get("instagram").and_then(Value::as_str),
            Some("@canalpros")
        );
        assert!(rows[0].get("email").expect("field present").is_null());
    }
}
