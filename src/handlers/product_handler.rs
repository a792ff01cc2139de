//! Product endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::constants::{
    MSG_PRODUCTS_RETRIEVED, MSG_PRODUCT_CREATED, MSG_PRODUCT_DELETED, MSG_PRODUCT_RETRIEVED,
    MSG_PRODUCT_UPDATED,
};
use crate::errors::{RequestError, ResultExt};
use crate::middleware::{require_auth, require_elevated};
use crate::models::{Envelope, PageQuery, ProductPatch, ProductRequest};
use crate::services::ProductService;
use crate::validators::page_request_from_query;

/// List products, one page at a time
///
/// `size` above 100 is lowered to 100; `meta.pageSize` reports the size applied.
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = Vec<crate::models::Product>),
        (status = 400, description = "Invalid page or size"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_products(
    product_service: web::Data<ProductService>,
    query: web::Query<PageQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    require_auth(&req).at(&req)?;
    let page_request = page_request_from_query(&query).at(&req)?;

    let page = product_service.list(page_request).await.at(&req)?;
    Ok(Envelope::page(MSG_PRODUCTS_RETRIEVED, page, &req).into_response())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = crate::models::Product),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    product_service: web::Data<ProductService>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    require_auth(&req).at(&req)?;
    let id = path.into_inner();

    let product = product_service.get_by_id(id).await.at(&req)?;
    Ok(Envelope::ok(MSG_PRODUCT_RETRIEVED, product, &req).into_response())
}

/// Create a product (SUPER_ADMIN only)
///
/// The body must reference an existing category by id; the response carries
/// the resolved category.
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = crate::models::Product),
        (status = 400, description = "Category missing or validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Referenced category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    body: web::Json<ProductRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;

    let product = product_service
        .create(body.into_inner())
        .await
        .at(&req)?;

    info!("{} created product {}", claims.sub, product.id);
    Ok(Envelope::created(MSG_PRODUCT_CREATED, product, &req).into_response())
}

/// Replace a product (SUPER_ADMIN only)
///
/// Without a category id in the body the current category is kept.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = crate::models::Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product or referenced category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    path: web::Path<i64>,
    body: web::Json<ProductRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let product = product_service
        .replace(id, body.into_inner())
        .await
        .at(&req)?;

    info!("{} replaced product {}", claims.sub, id);
    Ok(Envelope::ok(MSG_PRODUCT_UPDATED, product, &req).into_response())
}

/// Partially update a product (SUPER_ADMIN only)
///
/// Omitted fields are kept; an explicit `null` clears the field. The category
/// cannot be changed here.
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = crate::models::Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn patch_product(
    product_service: web::Data<ProductService>,
    path: web::Path<i64>,
    body: web::Json<ProductPatch>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let product = product_service
        .patch(id, body.into_inner())
        .await
        .at(&req)?;

    info!("{} patched product {}", claims.sub, id);
    Ok(Envelope::ok(MSG_PRODUCT_UPDATED, product, &req).into_response())
}

/// Delete a product (SUPER_ADMIN only)
///
/// Returns the product as it was before deletion.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = crate::models::Product),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let product = product_service.delete(id).await.at(&req)?;

    info!("{} deleted product {}", claims.sub, id);
    Ok(Envelope::ok(MSG_PRODUCT_DELETED, product, &req).into_response())
}
