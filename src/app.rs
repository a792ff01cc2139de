//! Application assembly shared by the binary and the integration tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App};
use std::sync::Arc;

use crate::models::{Category, ProductRecord};
use crate::repositories::{MemoryRepository, Repository};
use crate::routes;
use crate::services::{CategoryService, ProductService, TokenService};

/// Services injected into every worker.
#[derive(Clone)]
pub struct AppState {
    pub category_service: web::Data<CategoryService>,
    pub product_service: web::Data<ProductService>,
    pub token_service: web::Data<TokenService>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn Repository<Category>>,
        products: Arc<dyn Repository<ProductRecord>>,
        tokens: TokenService,
    ) -> Self {
        Self {
            category_service: web::Data::new(CategoryService::new(categories.clone())),
            product_service: web::Data::new(ProductService::new(products, categories)),
            token_service: web::Data::new(tokens),
        }
    }

    /// State backed by process memory; nothing survives a restart.
    pub fn in_memory(tokens: TokenService) -> Self {
        Self::new(
            Arc::new(MemoryRepository::<Category>::new()),
            Arc::new(MemoryRepository::<ProductRecord>::new()),
            tokens,
        )
    }
}

pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(state.category_service)
        .app_data(state.product_service)
        .app_data(state.token_service)
        .configure(routes::configure_routes)
        .default_service(web::route().to(routes::not_found))
}
