use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{AuthClaims, RecordId, ValidatedJson};
use crate::handlers::respond;
use crate::handlers::users::{ProfileRequest, UserHandler};
use crate::middleware::RequireAuth;

async fn find_users(handler: web::Data<UserHandler>) -> Result<HttpResponse, AppError> {
    Ok(respond(StatusCode::OK, handler.find_users().await?))
}

async fn get_user(
    handler: web::Data<UserHandler>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    Ok(respond(StatusCode::OK, handler.get_user(id.value()).await?))
}

async fn get_profile(
    handler: web::Data<UserHandler>,
    auth: AuthClaims,
) -> Result<HttpResponse, AppError> {
    Ok(respond(StatusCode::OK, handler.get_profile(auth.user_id).await?))
}

async fn upsert_profile(
    handler: web::Data<UserHandler>,
    auth: AuthClaims,
    body: ValidatedJson<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = handler.upsert_profile(auth.user_id, body.into_inner()).await?;
    Ok(respond(StatusCode::OK, profile))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, handler: web::Data<UserHandler>) {
    cfg.app_data(handler)
        .service(
            web::resource("/users")
                .route(web::get().to(find_users))
                .wrap(RequireAuth),
        )
        .service(
            web::resource("/user/{id}")
                .route(web::get().to(get_user))
                .wrap(RequireAuth),
        )
        .service(
            web::resource("/profile")
                .route(web::get().to(get_profile))
                .route(web::put().to(upsert_profile))
                .wrap(RequireAuth),
        );
}
