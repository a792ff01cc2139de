//! Authorization guards called at the top of handlers.
//!
//! - `require_auth` for any authenticated caller
//! - `require_role` for callers holding a specific role

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{ERR_AUTH_REQUIRED, ERR_INSUFFICIENT_ROLE};
use crate::errors::ApiError;
use crate::models::{Claims, Role};

use super::RequestExt;

/// Role required for every write on the catalog.
pub const ELEVATED_ROLE: Role = Role::SuperAdmin;

/// Extract claims from request or return Unauthorized error.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req).at(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })
}

/// Require `role` or return Forbidden.
///
/// Includes the authentication check, so it can be used on its own.
pub fn require_role(req: &HttpRequest, role: Role) -> Result<Claims, ApiError> {
    let claims = require_auth(req)?;
    if !claims.has_role(role) {
        warn!(
            "User {} (role: {}) attempted {} {} requiring {}",
            claims.sub,
            claims.role,
            req.method(),
            req.path(),
            role
        );
        return Err(ApiError::Forbidden(ERR_INSUFFICIENT_ROLE.to_string()));
    }
    Ok(claims)
}

/// Shorthand for `require_role(req, ELEVATED_ROLE)`.
pub fn require_elevated(req: &HttpRequest) -> Result<Claims, ApiError> {
    require_role(req, ELEVATED_ROLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use actix_web::HttpMessage;

    fn request_with_role(role: &str) -> HttpRequest {
        let req = TestRequest::post().uri("/categories").to_http_request();
        req.extensions_mut().insert(Claims {
            sub: "alice".to_string(),
            role: role.to_string(),
            exp: 0,
            iat: 0,
        });
        req
    }

    #[test]
    fn test_require_auth_without_claims() {
        let req = TestRequest::get().uri("/categories").to_http_request();
        assert!(matches!(require_auth(&req), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_require_elevated() {
        assert!(require_elevated(&request_with_role("SUPER_ADMIN")).is_ok());
        assert!(matches!(
            require_elevated(&request_with_role("ADMIN")),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            require_elevated(&request_with_role("USER")),
            Err(ApiError::Forbidden(_))
        ));
    }
}
