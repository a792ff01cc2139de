//! HTTP request handlers organized by resource.

pub mod category_handler;
pub mod product_handler;

pub use category_handler::*;
pub use product_handler::*;
