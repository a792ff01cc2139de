//! Services organized by domain concern.

pub mod category_service;
pub mod product_service;
pub mod token_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
pub use token_service::TokenService;
