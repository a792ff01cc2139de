//! Category endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::constants::{
    MSG_CATEGORIES_RETRIEVED, MSG_CATEGORY_CREATED, MSG_CATEGORY_DELETED, MSG_CATEGORY_RETRIEVED,
    MSG_CATEGORY_UPDATED,
};
use crate::errors::{RequestError, ResultExt};
use crate::middleware::{require_auth, require_elevated};
use crate::models::{CategoryPatch, CategoryRequest, Envelope, PageQuery};
use crate::services::CategoryService;
use crate::validators::page_request_from_query;

/// List categories, one page at a time
///
/// `size` above 100 is lowered to 100; `meta.pageSize` reports the size applied.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of categories", body = Vec<crate::models::Category>),
        (status = 400, description = "Invalid page or size"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_categories(
    category_service: web::Data<CategoryService>,
    query: web::Query<PageQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    require_auth(&req).at(&req)?;
    let page_request = page_request_from_query(&query).at(&req)?;

    let page = category_service.list(page_request).await.at(&req)?;
    Ok(Envelope::page(MSG_CATEGORIES_RETRIEVED, page, &req).into_response())
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = crate::models::Category),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    require_auth(&req).at(&req)?;
    let id = path.into_inner();

    let category = category_service.get_by_id(id).await.at(&req)?;
    Ok(Envelope::ok(MSG_CATEGORY_RETRIEVED, category, &req).into_response())
}

/// Create a category (SUPER_ADMIN only)
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = crate::models::Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    category_service: web::Data<CategoryService>,
    body: web::Json<CategoryRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;

    let category = category_service
        .create(body.into_inner())
        .await
        .at(&req)?;

    info!("{} created category {}", claims.sub, category.id);
    Ok(Envelope::created(MSG_CATEGORY_CREATED, category, &req).into_response())
}

/// Replace a category (SUPER_ADMIN only)
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category replaced", body = crate::models::Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<i64>,
    body: web::Json<CategoryRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let category = category_service
        .replace(id, body.into_inner())
        .await
        .at(&req)?;

    info!("{} replaced category {}", claims.sub, id);
    Ok(Envelope::ok(MSG_CATEGORY_UPDATED, category, &req).into_response())
}

/// Partially update a category (SUPER_ADMIN only)
///
/// Omitted fields are kept; an explicit `null` clears the field.
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "Categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryPatch,
    responses(
        (status = 200, description = "Category updated", body = crate::models::Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn patch_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<i64>,
    body: web::Json<CategoryPatch>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let category = category_service
        .patch(id, body.into_inner())
        .await
        .at(&req)?;

    info!("{} patched category {}", claims.sub, id);
    Ok(Envelope::ok(MSG_CATEGORY_UPDATED, category, &req).into_response())
}

/// Delete a category (SUPER_ADMIN only)
///
/// Returns the category as it was before deletion. Products that reference it
/// are not touched.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = crate::models::Category),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, RequestError> {
    let claims = require_elevated(&req).at(&req)?;
    let id = path.into_inner();

    let category = category_service.delete(id).await.at(&req)?;

    info!("{} deleted category {}", claims.sub, id);
    Ok(Envelope::ok(MSG_CATEGORY_DELETED, category, &req).into_response())
}
