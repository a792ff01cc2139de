use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::COLLECTION_CATEGORIES;
use crate::models::Entity;

/// Product category, stored as-is and returned as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
pub struct Category {
    /// Server-generated identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Category name
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Books")]
    pub name: Option<String>,
    /// Free-form description
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[schema(example = "Printed and digital books")]
    pub description: Option<String>,
}

impl Category {
    /// Placeholder for a reference whose category record no longer exists.
    pub fn detached(id: i64) -> Self {
        Self {
            id,
            name: None,
            description: None,
        }
    }
}

impl Entity for Category {
    const COLLECTION: &'static str = COLLECTION_CATEGORIES;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}
