use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{AuthClaims, RecordId, ValidatedJson};
use crate::handlers::products::{CreateProductRequest, ProductHandler};
use crate::handlers::respond;
use crate::middleware::RequireAuth;

async fn find_products(handler: web::Data<ProductHandler>) -> Result<HttpResponse, AppError> {
    Ok(respond(StatusCode::OK, handler.find_products().await?))
}

async fn get_product(
    handler: web::Data<ProductHandler>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    Ok(respond(StatusCode::OK, handler.get_product(id.value()).await?))
}

async fn create_product(
    handler: web::Data<ProductHandler>,
    auth: AuthClaims,
    body: ValidatedJson<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = handler.create_product(auth.user_id, body.into_inner()).await?;
    Ok(respond(StatusCode::CREATED, product))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, handler: web::Data<ProductHandler>) {
    cfg.app_data(handler)
        .service(
            web::resource("/products")
                .route(web::get().to(find_products))
                .wrap(RequireAuth),
        )
        // public: product pages are readable without an account
        .service(web::resource("/product/{id}").route(web::get().to(get_product)))
        .service(
            web::resource("/product")
                .route(web::post().to(create_product))
                .wrap(RequireAuth),
        );
}
