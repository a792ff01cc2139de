//! Category request models.

use serde::Deserialize;
use utoipa::ToSchema;

use super::presence::{apply_present, deserialize_present};
use crate::models::Category;

/// Full category body for POST and PUT.
///
/// A client-supplied `id` is accepted but never trusted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Books")]
    pub name: Option<String>,
    #[schema(example = "Printed and digital books")]
    pub description: Option<String>,
}

impl CategoryRequest {
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Partial category body for PATCH. Omitted keys are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryPatch {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, example = "Comics")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl CategoryPatch {
    pub fn apply(self, category: &mut Category) {
        apply_present(&mut category.name, self.name);
        apply_present(&mut category.description, self.description);
    }
}
