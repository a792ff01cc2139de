use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use std::fmt;
use utoipa::OpenApi;

use crate::constants::{ERR_RESOURCE_NOT_FOUND, MSG_SERVER_RUNNING};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Extractor failures answer with the envelope too
        .app_data(web::JsonConfig::default().error_handler(|err, req| bad_request(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| bad_request(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| bad_request(err, req)))
        // Health check (public)
        .route("/health", web::get().to(health_check))
        // OpenAPI document (public)
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Category routes (protected; writes need the elevated role)
        .service(
            web::scope("/categories")
                .wrap(AuthMiddleware)
                .route("", web::get().to(handlers::get_categories))
                .route("", web::post().to(handlers::create_category))
                .route("/{id}", web::get().to(handlers::get_category))
                .route("/{id}", web::put().to(handlers::update_category))
                .route("/{id}", web::patch().to(handlers::patch_category))
                .route("/{id}", web::delete().to(handlers::delete_category)),
        )
        // Product routes (protected; writes need the elevated role)
        .service(
            web::scope("/products")
                .wrap(AuthMiddleware)
                .route("", web::get().to(handlers::get_products))
                .route("", web::post().to(handlers::create_product))
                .route("/{id}", web::get().to(handlers::get_product))
                .route("/{id}", web::put().to(handlers::update_product))
                .route("/{id}", web::patch().to(handlers::patch_product))
                .route("/{id}", web::delete().to(handlers::delete_product)),
        );
}

fn bad_request<E: fmt::Display>(err: E, req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).at(req).into()
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound(ERR_RESOURCE_NOT_FOUND.to_string())
        .at(&req)
        .error_response()
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
