//! Data models organized by type.

pub mod category;
pub mod claims;
pub mod entity;
pub mod page;
pub mod product;
pub mod requests;
pub mod responses;

pub use category::*;
pub use claims::*;
pub use entity::*;
pub use page::*;
pub use product::*;
pub use requests::*;
pub use responses::*;
