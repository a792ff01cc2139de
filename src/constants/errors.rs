//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_TOKEN_SERVICE_MISSING: &str = "Token verification is not configured";

// Authorization errors
pub const ERR_INSUFFICIENT_ROLE: &str = "You don't have permission to perform this action";

// Relationship errors
pub const ERR_CATEGORY_REQUIRED: &str = "Category is required";

// Pagination errors
pub const ERR_INVALID_PAGE: &str = "Page must be greater than or equal to 1";
pub const ERR_INVALID_PAGE_SIZE: &str = "Size must be greater than or equal to 1";

// Generic errors
pub const ERR_RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_COUNTER_UNAVAILABLE: &str = "Failed to allocate a new id";

/// "Category id 7 not found"
pub fn err_category_not_found(id: i64) -> String {
    format!("Category id {} not found", id)
}

/// "Product id 7 not found"
pub fn err_product_not_found(id: i64) -> String {
    format!("Product id {} not found", id)
}
