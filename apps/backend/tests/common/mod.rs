#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a success envelope and return its `data` payload.
pub async fn read_envelope<B: MessageBody>(resp: ServiceResponse<B>, expected: StatusCode) -> Value {
    assert_eq!(resp.status(), expected, "unexpected status");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], expected.as_u16(), "envelope code mirrors status");
    body["data"].clone()
}
