//! MongoDB collection names.

pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_PRODUCTS: &str = "products";

/// Holds one `{ _id: <collection>, seq: <i64> }` document per entity collection.
pub const COLLECTION_COUNTERS: &str = "counters";
