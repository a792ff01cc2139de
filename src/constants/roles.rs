//! Role names carried in JWT claims.

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";

/// Prefix some token issuers put in front of role names.
pub const ROLE_PREFIX: &str = "ROLE_";
