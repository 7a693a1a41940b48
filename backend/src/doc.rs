//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification for the REST
//! API. It registers all link, request, and health endpoints plus the
//! schema wrappers from the inbound layer. Swagger UI serves the document
//! in debug builds only.

use utoipa::OpenApi;

use crate::inbound::http::links::{
    IssuedLinkBody, RecommendationBody, SubmitRecommendationBody, ToggleTriedBody,
};
use crate::inbound::http::requests::{
    BusinessRequestBody, BusinessResponseBody, CreateRequestBody, SubmitResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vouch backend API",
        description = "HTTP interface for personal recommendation share links \
                       and the public request board."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::links::create_link,
        crate::inbound::http::links::submit_recommendation,
        crate::inbound::http::links::list_recommendations,
        crate::inbound::http::links::toggle_tried,
        crate::inbound::http::links::delete_recommendation,
        crate::inbound::http::requests::create_request,
        crate::inbound::http::requests::list_requests,
        crate::inbound::http::requests::get_request,
        crate::inbound::http::requests::submit_response,
        crate::inbound::http::requests::list_responses,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        IssuedLinkBody,
        SubmitRecommendationBody,
        RecommendationBody,
        ToggleTriedBody,
        CreateRequestBody,
        BusinessRequestBody,
        SubmitResponseBody,
        BusinessResponseBody,
        ErrorSchema,
    )),
    tags(
        (name = "links", description = "Personal share links and their recommendations"),
        (name = "requests", description = "Public request and response board"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
