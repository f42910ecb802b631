mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details;
use support::create_test_app;

#[actix_web::test]
async fn every_response_carries_request_id() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id should be set");
    assert_eq!(request_id.len(), 36, "uuid v4 string");
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id should be set");

    let problem =
        assert_problem_details(resp, "UNAUTHORIZED_MISSING_BEARER", StatusCode::UNAUTHORIZED).await;
    assert_eq!(problem.trace_id, request_id);
}
