//! Request models for API endpoints.

pub mod category;
pub mod page;
pub mod presence;
pub mod product;

pub use category::*;
pub use page::*;
pub use presence::*;
pub use product::*;
