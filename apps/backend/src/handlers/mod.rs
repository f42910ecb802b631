//! Request handlers.
//!
//! Each handler owns the repositories it needs, built once at startup by
//! [`Handlers::new`] and shared across workers through `web::Data`. Handler
//! methods take plain request DTOs and return serializable payloads; the
//! actix glue in `routes` wraps them in the response envelope.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::repos::{
    ProductRepository, ProfileRepository, SeaProductRepository, SeaProfileRepository,
    SeaUserRepository, UserRepository,
};
use crate::state::app_state::AppState;

pub mod auth;
pub mod products;
pub mod users;

pub use auth::AuthHandler;
pub use products::ProductHandler;
pub use users::UserHandler;

/// All handlers, ready to be registered by `routes::configure`.
#[derive(Clone)]
pub struct Handlers {
    pub auth: web::Data<AuthHandler>,
    pub users: web::Data<UserHandler>,
    pub products: web::Data<ProductHandler>,
}

impl Handlers {
    /// Construct every repository against the shared connection.
    pub fn new(state: &AppState) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SeaUserRepository::new(state.db.clone()));
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(SeaProfileRepository::new(state.db.clone()));
        let products: Arc<dyn ProductRepository> =
            Arc::new(SeaProductRepository::new(state.db.clone()));

        Self::from_repositories(users, profiles, products, state)
    }

    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        products: Arc<dyn ProductRepository>,
        state: &AppState,
    ) -> Self {
        Self {
            auth: web::Data::new(AuthHandler::new(users.clone(), state.security.clone())),
            users: web::Data::new(UserHandler::new(users, profiles)),
            products: web::Data::new(ProductHandler::new(products)),
        }
    }
}

/// Success body: `{"code": <status>, "data": <payload>}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: T,
}

pub fn respond<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        code: status.as_u16(),
        data,
    })
}

pub(crate) fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

/// Trim and drop empty optional strings.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
