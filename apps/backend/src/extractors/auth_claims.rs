use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::jwt::Claims;
use crate::error::AppError;

/// Verified token claims, as stored in request extensions by `RequireAuth`.
///
/// Only usable on resources wrapped in `RequireAuth`; elsewhere it fails
/// with 401 `UNAUTHORIZED_MISSING_BEARER`.
#[derive(Debug, Clone)]
pub struct AuthClaims {
    pub user_id: i64,
    pub claims: Claims,
}

impl FromRequest for AuthClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(from_extensions(req))
    }
}

fn from_extensions(req: &HttpRequest) -> Result<AuthClaims, AppError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    Ok(AuthClaims {
        user_id: claims.user_id()?,
        claims,
    })
}
