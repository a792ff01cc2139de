//! Success message constants used throughout the application.

// Category messages
pub const MSG_CATEGORIES_RETRIEVED: &str = "Categories retrieved successfully";
pub const MSG_CATEGORY_RETRIEVED: &str = "Category retrieved successfully";
pub const MSG_CATEGORY_CREATED: &str = "Category created successfully";
pub const MSG_CATEGORY_UPDATED: &str = "Category updated successfully";
pub const MSG_CATEGORY_DELETED: &str = "Category deleted successfully";

// Product messages
pub const MSG_PRODUCTS_RETRIEVED: &str = "Products retrieved successfully";
pub const MSG_PRODUCT_RETRIEVED: &str = "Product retrieved successfully";
pub const MSG_PRODUCT_CREATED: &str = "Product created successfully";
pub const MSG_PRODUCT_UPDATED: &str = "Product updated successfully";
pub const MSG_PRODUCT_DELETED: &str = "Product deleted successfully";

// Health
pub const MSG_SERVER_RUNNING: &str = "Server is running";
