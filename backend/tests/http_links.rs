//! End-to-end coverage for the vouch-link flow over in-memory stores.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};

use vouch_backend::domain::{LinkService, RequestService};
use vouch_backend::inbound::http::links::{
    create_link, delete_recommendation, list_recommendations, submit_recommendation, toggle_tried,
};
use vouch_backend::inbound::http::state::HttpState;
use vouch_backend::outbound::memory::{InMemoryLinkRepository, InMemoryRequestRepository};

async fn build_test_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let links = Arc::new(LinkService::new(Arc::new(InMemoryLinkRepository::new())));
    let requests = Arc::new(RequestService::new(Arc::new(
        InMemoryRequestRepository::new(),
    )));
    let state = HttpState::new(links, requests);

    actix_test::init_service(
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(create_link)
                .service(submit_recommendation)
                .service(list_recommendations)
                .service(toggle_tried)
                .service(delete_recommendation),
        ),
    )
    .await
}

async fn mint_link<S>(app: &S) -> (String, String)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/links")
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let value: Value = actix_test::read_body_json(response).await;
    let slug = value["slug"].as_str().expect("slug").to_owned();
    let owner_key = value["ownerKey"].as_str().expect("ownerKey").to_owned();
    (slug, owner_key)
}

async fn submit<S>(app: &S, slug: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/links/{slug}/recommendations"))
        .set_json(body)
        .to_request();
    actix_test::call_service(app, request).await
}

async fn list<S>(app: &S, slug: &str, owner_key: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::get()
        .uri(&format!(
            "/api/v1/links/{slug}/recommendations?ownerKey={owner_key}"
        ))
        .to_request();
    actix_test::call_service(app, request).await
}

#[actix_rt::test]
async fn minted_link_has_distinct_slug_and_owner_key() {
    let app = build_test_app().await;

    let (slug, owner_key) = mint_link(&app).await;

    assert_eq!(slug.len(), 6);
    assert_eq!(owner_key.len(), 12);
    assert_ne!(slug, owner_key);
}

#[actix_rt::test]
async fn submitted_recommendations_list_newest_first_for_the_owner() {
    let app = build_test_app().await;
    let (slug, owner_key) = mint_link(&app).await;

    let first = submit(&app, &slug, json!({ "body": "first tip" })).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = submit(&app, &slug, json!({ "body": "second tip", "name": "Ana" })).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let response = list(&app, &slug, &owner_key).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listing: Value = actix_test::read_body_json(response).await;
    let rows = listing.as_array().expect("array body");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["body"].as_str(), Some("second tip"));
    assert_eq!(rows[0]["name"].as_str(), Some("Ana"));
    assert_eq!(rows[1]["body"].as_str(), Some("first tip"));
    assert_eq!(rows[0]["isTried"].as_bool(), Some(false));
    assert!(rows[0].get("ownerKey").is_none());
}

#[actix_rt::test]
async fn blank_optional_fields_are_stored_absent() {
    let app = build_test_app().await;
    let (slug, owner_key) = mint_link(&app).await;

    let response = submit(
        &app,
        &slug,
        json!({ "body": "try the bakery", "name": "   ", "contact": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = list(&app, &slug, &owner_key).await;
    let listing: Value = actix_test::read_body_json(response).await;
    let rows = listing.as_array().expect("array body");

    assert!(rows[0]["name"].is_null());
    assert!(rows[0]["contact"].is_null());
}

#[actix_rt::test]
async fn submission_to_an_unknown_slug_is_not_found() {
    let app = build_test_app().await;

    let response = submit(&app, "zzzzzz", json!({ "body": "tip" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"].as_str(), Some("not_found"));
    assert_eq!(value["message"].as_str(), Some("link not found"));
}

#[actix_rt::test]
async fn blank_body_is_rejected_with_field_details() {
    let app = build_test_app().await;
    let (slug, _) = mint_link(&app).await;

    let response = submit(&app, &slug, json!({ "body": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"].as_str(), Some("invalid_request"));
    assert_eq!(value["details"]["field"].as_str(), Some("body"));
}

#[actix_rt::test]
async fn listing_with_the_wrong_key_is_silently_not_found() {
    let app = build_test_app().await;
    let (slug, _) = mint_link(&app).await;
    submit(&app, &slug, json!({ "body": "tip" })).await;

    let response = list(&app, &slug, "wrong-key-00").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["message"].as_str(), Some("link not found"));
}

#[actix_rt::test]
async fn tried_flag_toggles_both_ways() {
    let app = build_test_app().await;
    let (slug, owner_key) = mint_link(&app).await;
    let created = submit(&app, &slug, json!({ "body": "tip" })).await;
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["id"].as_str().expect("id").to_owned();

    for (target, expected) in [(true, true), (false, false)] {
        let request = actix_test::TestRequest::patch()
            .uri(&format!("/api/v1/links/{slug}/recommendations/{id}"))
            .set_json(json!({ "ownerKey": owner_key, "isTried": target }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = list(&app, &slug, &owner_key).await;
        let listing: Value = actix_test::read_body_json(response).await;
        assert_eq!(listing[0]["isTried"].as_bool(), Some(expected));
    }
}

#[actix_rt::test]
async fn another_owners_credentials_cannot_mutate_a_recommendation() {
    let app = build_test_app().await;
    let (victim_slug, victim_key) = mint_link(&app).await;
    let (attacker_slug, attacker_key) = mint_link(&app).await;
    let created = submit(&app, &victim_slug, json!({ "body": "tip" })).await;
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["id"].as_str().expect("id").to_owned();

    // Valid credentials for a different link must not reach the row.
    let request = actix_test::TestRequest::patch()
        .uri(&format!(
            "/api/v1/links/{attacker_slug}/recommendations/{id}"
        ))
        .set_json(json!({ "ownerKey": attacker_key, "isTried": true }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = actix_test::TestRequest::delete()
        .uri(&format!(
            "/api/v1/links/{attacker_slug}/recommendations/{id}?ownerKey={attacker_key}"
        ))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = list(&app, &victim_slug, &victim_key).await;
    let listing: Value = actix_test::read_body_json(response).await;
    assert_eq!(listing.as_array().expect("array body").len(), 1);
    assert_eq!(listing[0]["isTried"].as_bool(), Some(false));
}

#[actix_rt::test]
async fn delete_with_the_owners_key_removes_the_row() {
    let app = build_test_app().await;
    let (slug, owner_key) = mint_link(&app).await;
    let created = submit(&app, &slug, json!({ "body": "tip" })).await;
    let created: Value = actix_test::read_body_json(created).await;
    let id = created["id"].as_str().expect("id").to_owned();

    let request = actix_test::TestRequest::delete()
        .uri(&format!(
            "/api/v1/links/{slug}/recommendations/{id}?ownerKey={owner_key}"
        ))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = list(&app, &slug, &owner_key).await;
    let listing: Value = actix_test::read_body_json(response).await;
    assert!(listing.as_array().expect("array body").is_empty());
}
