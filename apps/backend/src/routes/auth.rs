use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{AuthClaims, ValidatedJson};
use crate::handlers::auth::{AuthHandler, LoginRequest, RegisterRequest};
use crate::handlers::respond;
use crate::middleware::RequireAuth;

async fn register(
    handler: web::Data<AuthHandler>,
    body: ValidatedJson<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = handler.register(body.into_inner()).await?;
    Ok(respond(StatusCode::CREATED, payload))
}

async fn login(
    handler: web::Data<AuthHandler>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = handler.login(body.into_inner()).await?;
    Ok(respond(StatusCode::OK, payload))
}

async fn check_auth(
    handler: web::Data<AuthHandler>,
    auth: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let payload = handler.check_auth(auth.user_id).await?;
    Ok(respond(StatusCode::OK, payload))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, handler: web::Data<AuthHandler>) {
    cfg.app_data(handler)
        .service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(
            web::resource("/check-auth")
                .route(web::get().to(check_auth))
                .wrap(RequireAuth),
        );
}
