//! Tests for the request/response service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockRequestRepository;

fn sample_request() -> BusinessRequest {
    BusinessRequest {
        id: Uuid::new_v4(),
        location: "Austin, TX".to_owned(),
        business_type: "Bakery".to_owned(),
        comment: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn create_request_rejects_blank_location_before_any_store_call() {
    let mut repo = MockRequestRepository::new();
    repo.expect_insert_request().times(0);

    let service = RequestService::new(Arc::new(repo));
    let error = service
        .create_request(RequestDraft {
            location: "  ".to_owned(),
            business_type: "Bakery".to_owned(),
            comment: None,
        })
        .await
        .expect_err("blank location");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn create_request_rejects_blank_business_type() {
    let mut repo = MockRequestRepository::new();
    repo.expect_insert_request().times(0);

    let service = RequestService::new(Arc::new(repo));
    let error = service
        .create_request(RequestDraft {
            location: "Austin, TX".to_owned(),
            business_type: String::new(),
            comment: None,
        })
        .await
        .expect_err("blank business type");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error
        .details()
        .and_then(|value| value.as_object())
        .expect("details");
    assert_eq!(
        details.get("field").and_then(|v| v.as_str()),
        Some("businessType")
    );
}

#[tokio::test]
async fn create_request_normalises_blank_comment_to_absent() {
    let mut repo = MockRequestRepository::new();
    repo.expect_insert_request()
        .times(1)
        .withf(|request| request.comment.is_none())
        .return_once(|_| Ok(()));

    let service = RequestService::new(Arc::new(repo));
    let request = service
        .create_request(RequestDraft {
            location: "Austin, TX".to_owned(),
            business_type: "Bakery".to_owned(),
            comment: Some("   ".to_owned()),
        })
        .await
        .expect("request stored");

    assert_eq!(request.location, "Austin, TX");
    assert_eq!(request.business_type, "Bakery");
    assert!(request.comment.is_none());
}

#[tokio::test]
async fn list_requests_collapses_blank_filters_before_querying() {
    let mut repo = MockRequestRepository::new();
    repo.expect_list_requests()
        .times(1)
        .withf(|filter| filter.location.is_none() && filter.business_type.is_none())
        .return_once(|_| Ok(Vec::new()));

    let service = RequestService::new(Arc::new(repo));
    let listing = service
        .list_requests(RequestFilter {
            location: Some(String::new()),
            business_type: Some("   ".to_owned()),
        })
        .await
        .expect("listing succeeds");

    assert!(listing.is_empty());
}

#[tokio::test]
async fn list_requests_forwards_trimmed_filters() {
    let mut repo = MockRequestRepository::new();
    repo.expect_list_requests()
        .times(1)
        .withf(|filter| {
            filter.location.as_deref() == Some("coffee")
                && filter.business_type.as_deref() == Some("Bakery")
        })
        .return_once(|_| Ok(Vec::new()));

    let service = RequestService::new(Arc::new(repo));
    service
        .list_requests(RequestFilter {
            location: Some("  coffee ".to_owned()),
            business_type: Some("Bakery".to_owned()),
        })
        .await
        .expect("listing succeeds");
}

#[tokio::test]
async fn get_request_passes_absence_through_as_none() {
    let mut repo = MockRequestRepository::new();
    repo.expect_find_request().times(1).return_once(|_| Ok(None));

    let service = RequestService::new(Arc::new(repo));
    let found = service
        .get_request(Uuid::new_v4())
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[tokio::test]
async fn get_request_maps_connection_error_to_service_unavailable() {
    let mut repo = MockRequestRepository::new();
    repo.expect_find_request()
        .times(1)
        .return_once(|_| Err(RequestRepositoryError::connection("pool unavailable")));

    let service = RequestService::new(Arc::new(repo));
    let error = service
        .get_request(Uuid::new_v4())
        .await
        .expect_err("store unreachable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn submit_response_rejects_blank_business_before_any_store_call() {
    let mut repo = MockRequestRepository::new();
    repo.expect_find_request().times(0);
    repo.expect_insert_response().times(0);

    let service = RequestService::new(Arc::new(repo));
    let error = service
        .submit_response(
            Uuid::new_v4(),
            ResponseDraft {
                business: "  ".to_owned(),
                email: None,
                instagram: None,
                website: None,
                notes: None,
            },
        )
        .await
        .expect_err("blank business");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn submit_response_requires_an_existing_request() {
    let mut repo = MockRequestRepository::new();
    repo.expect_find_request().times(1).return_once(|_| Ok(None));
    repo.expect_insert_response().times(0);

    let service = RequestService::new(Arc::new(repo));
    let error = service
        .submit_response(
            Uuid::new_v4(),
            ResponseDraft {
                business: "Joe's Pizza".to_owned(),
                email: None,
                instagram: None,
                website: None,
                notes: None,
            },
        )
        .await
        .expect_err("unknown request");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn submit_response_stores_blank_optionals_as_absent() {
    let request = sample_request();
    let request_id = request.id;

    let mut repo = MockRequestRepository::new();
    repo.expect_find_request()
        .times(1)
        .return_once(move |_| Ok(Some(request)));
    repo.expect_insert_response()
        .times(1)
        .withf(move |response| {
            response.request_id == request_id
                && response.email.is_none()
                && response.instagram.is_none()
                && response.website.is_none()
                && response.notes.is_none()
        })
        .return_once(|_| Ok(()));

    let service = RequestService::new(Arc::new(repo));
    let response = service
        .submit_response(
            request_id,
            ResponseDraft {
                business: "Joe's Pizza".to_owned(),
                email: Some(String::new()),
                instagram: Some("  ".to_owned()),
                website: None,
                notes: None,
            },
        )
        .await
        .expect("response stored");

    assert_eq!(response.business, "Joe's Pizza");
    assert!(response.email.is_none());
}

#[tokio::test]
async fn list_responses_forwards_the_request_id() {
    let request_id = Uuid::new_v4();

    let mut repo = MockRequestRepository::new();
    repo.expect_list_responses_for_request()
        .times(1)
        .withf(move |id| *id == request_id)
        .return_once(|_| Ok(Vec::new()));

    let service = RequestService::new(Arc::new(repo));
    let listing = service
        .list_responses(request_id)
        .await
        .expect("listing succeeds");

    assert!(listing.is_empty());
}
