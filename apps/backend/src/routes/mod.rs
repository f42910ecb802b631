use actix_web::web;

use crate::handlers::Handlers;

pub mod auth;
pub mod health;
pub mod products;
pub mod users;

/// API prefix for every business route.
pub const API_SCOPE: &str = "/api/v1";

/// Register the full route table.
///
/// `/health` sits at the root; everything else lives under `/api/v1`.
/// Middleware is declared per resource in each family's `configure_routes`,
/// so the same table is served in production and in tests.
pub fn configure(handlers: Handlers) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.configure(health::configure_routes);
        cfg.service(
            web::scope(API_SCOPE)
                .configure(|c| auth::configure_routes(c, handlers.auth))
                .configure(|c| users::configure_routes(c, handlers.users))
                .configure(|c| products::configure_routes(c, handlers.products)),
        );
    }
}
