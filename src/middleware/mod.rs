//! Authentication middleware and authorization guards.

pub mod auth_helpers;
pub mod auth_middleware;
pub mod request_ext;

pub use auth_helpers::*;
pub use auth_middleware::AuthMiddleware;
pub use request_ext::RequestExt;
