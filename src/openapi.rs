use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    Category, CategoryPatch, CategoryRef, CategoryRequest, HealthResponse, Product, ProductPatch,
    ProductRequest,
};

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Paginated CRUD for product categories and products. Every response uses the same envelope: message, data and request meta.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Categories", description = "Category CRUD; writes require SUPER_ADMIN"),
        (name = "Products", description = "Product CRUD; writes require SUPER_ADMIN")
    ),
    paths(
        crate::handlers::get_categories,
        crate::handlers::get_category,
        crate::handlers::create_category,
        crate::handlers::update_category,
        crate::handlers::patch_category,
        crate::handlers::delete_category,
        crate::handlers::get_products,
        crate::handlers::get_product,
        crate::handlers::create_product,
        crate::handlers::update_product,
        crate::handlers::patch_product,
        crate::handlers::delete_product,
        crate::routes::health_check
    ),
    components(
        schemas(
            Category,
            CategoryRequest,
            CategoryPatch,
            Product,
            ProductRequest,
            ProductPatch,
            CategoryRef,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT signed with the shared secret; writes need role SUPER_ADMIN",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/categories",
            "/categories/{id}",
            "/products",
            "/products/{id}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_responses_reference_entity_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema = |path: &str| {
            doc["paths"][path]["get"]["responses"]["200"]["content"]["application/json"]["schema"]
                .clone()
        };

        assert_eq!(
            schema("/categories/{id}")["$ref"],
            "#/components/schemas/Category"
        );
        assert_eq!(
            schema("/products")["items"]["$ref"],
            "#/components/schemas/Product"
        );
        assert!(doc["components"]["schemas"]["Product"].is_object());
    }
}
