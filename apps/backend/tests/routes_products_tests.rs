mod common;
mod support;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use backend_test_support::assert_problem_details;
use serde_json::json;
use support::auth::{bearer_header, expired_bearer_header};
use support::{create_test_app, factory};

#[actix_web::test]
async fn list_products_requires_bearer() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "UNAUTHORIZED_MISSING_BEARER", StatusCode::UNAUTHORIZED).await;
}

#[actix_web::test]
async fn list_products_rejects_bad_tokens() {
    let state = support::test_state().await;
    let expired = expired_bearer_header(1, "ann@example.com", &state.security);
    let app = create_test_app(state).build().await;

    let cases = [
        (expired, "UNAUTHORIZED_EXPIRED_JWT"),
        ("Bearer not.a.token".to_string(), "UNAUTHORIZED_INVALID_JWT"),
        ("Basic YW5uOnB3".to_string(), "UNAUTHORIZED_MISSING_BEARER"),
    ];

    for (value, code) in cases {
        let req = test::TestRequest::get()
            .uri("/api/v1/products")
            .insert_header((header::AUTHORIZATION, value))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert_problem_details(resp, code, StatusCode::UNAUTHORIZED).await;
    }
}

#[actix_web::test]
async fn list_products_with_valid_token_reaches_handler() {
    let state = support::test_state().await;
    let ann = factory::create_user(&state, "Ann", "ann@example.com").await;
    factory::create_product(&state, ann.id, "Kettle", 2599).await;
    let auth = bearer_header(ann.id, &ann.email, &state.security);
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/products")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let data = common::read_envelope(resp, StatusCode::OK).await;
    let products = data.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Kettle");
    assert_eq!(products[0]["price"], 2599);
}

#[actix_web::test]
async fn get_product_by_numeric_id_is_public() {
    let state = support::test_state().await;
    let ann = factory::create_user(&state, "Ann", "ann@example.com").await;
    let kettle = factory::create_product(&state, ann.id, "Kettle", 2599).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/product/{}", kettle.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let data = common::read_envelope(resp, StatusCode::OK).await;
    assert_eq!(data["id"], kettle.id);
    assert_eq!(data["user_id"], ann.id);
}

#[actix_web::test]
async fn get_product_with_non_numeric_id_is_invalid_id() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    for id in ["abc", "0", "-4"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/product/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "INVALID_ID", StatusCode::BAD_REQUEST).await;
    }
}

#[actix_web::test]
async fn get_missing_product_is_not_found() {
    let state = support::test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/v1/product/77").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "PRODUCT_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn create_product_is_owned_by_token_subject() {
    let state = support::test_state().await;
    let ann = factory::create_user(&state, "Ann", "ann@example.com").await;
    let auth = bearer_header(ann.id, &ann.email, &state.security);
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/product")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({"name": "Teapot", "price": 1800, "qty": 2, "description": "Glazed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let data = common::read_envelope(resp, StatusCode::CREATED).await;
    assert_eq!(data["user_id"], ann.id);
    assert_eq!(data["description"], "Glazed");

    let req = test::TestRequest::post()
        .uri("/api/v1/product")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(json!({"name": "Teapot", "price": -1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_PRICE", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn create_product_without_token_never_reaches_handler() {
    let state = support::test_state().await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/product")
        .set_json(json!({"name": "Teapot", "price": 1800, "qty": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let products = factory::all_products(&state).await;
    assert!(products.is_empty());
}

#[actix_web::test]
async fn create_product_without_price_is_bad_request() {
    let state = support::test_state().await;
    let ann = factory::create_user(&state, "Ann", "ann@example.com").await;
    let auth = bearer_header(ann.id, &ann.email, &state.security);
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/product")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(json!({"name": "Teapot"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST).await;

    assert!(factory::all_products(&state).await.is_empty());
}
