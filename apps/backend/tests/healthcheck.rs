mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use support::create_test_app;

#[actix_web::test]
async fn health_reports_db_and_migrations() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000003_create_products");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn unknown_route_is_router_404() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/v1/nothing-here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
