//! JWT Claims model and roles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ROLE_ADMIN, ROLE_PREFIX, ROLE_SUPER_ADMIN, ROLE_USER};

/// Roles recognised by the authorization guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
            Role::SuperAdmin => ROLE_SUPER_ADMIN,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // subject (user identifier assigned by the issuer)
    pub role: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

impl Claims {
    /// Check whether the token carries `role`, with or without a `ROLE_` prefix.
    pub fn has_role(&self, role: Role) -> bool {
        let claimed = self.role.trim();
        let claimed = match claimed.get(..ROLE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ROLE_PREFIX) => {
                &claimed[ROLE_PREFIX.len()..]
            }
            _ => claimed,
        };
        claimed.eq_ignore_ascii_case(role.as_str())
    }
}
