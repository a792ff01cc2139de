//! Product request models.

use serde::Deserialize;
use utoipa::ToSchema;

use super::presence::{apply_present, deserialize_present};
use crate::models::ProductRecord;

/// Category reference inside a product body. Only the id is read.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryRef {
    #[schema(example = 1)]
    pub id: Option<i64>,
}

/// Full product body for POST and PUT.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub id: Option<i64>,
    #[schema(example = "Novel")]
    pub name: Option<String>,
    #[schema(example = "A paperback novel")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    #[schema(example = 3)]
    pub quantity: Option<i32>,
    pub category: Option<CategoryRef>,
}

impl ProductRequest {
    /// The referenced category id, if the body names one.
    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().and_then(|category| category.id)
    }

    pub fn into_record(self, id: i64, category_id: i64) -> ProductRecord {
        ProductRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            category_id,
        }
    }
}

/// Partial product body for PATCH.
///
/// The category cannot be changed here; a `category` key is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductPatch {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>, example = 5)]
    pub quantity: Option<Option<i32>>,
}

impl ProductPatch {
    pub fn apply(self, record: &mut ProductRecord) {
        apply_present(&mut record.name, self.name);
        apply_present(&mut record.description, self.description);
        apply_present(&mut record.price, self.price);
        apply_present(&mut record.quantity, self.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn novel() -> ProductRecord {
        ProductRecord {
            id: 1,
            name: Some("Novel".to_string()),
            description: Some("Paperback".to_string()),
            price: Some(9.99),
            quantity: Some(3),
            category_id: 1,
        }
    }

    #[test]
    fn test_category_id_requires_nested_id() {
        let missing: ProductRequest = serde_json::from_str(r#"{"name":"Novel"}"#).unwrap();
        assert_eq!(missing.category_id(), None);

        let no_id: ProductRequest =
            serde_json::from_str(r#"{"name":"Novel","category":{"name":"Books"}}"#).unwrap();
        assert_eq!(no_id.category_id(), None);

        let with_id: ProductRequest =
            serde_json::from_str(r#"{"category":{"id":7,"name":"Books"}}"#).unwrap();
        assert_eq!(with_id.category_id(), Some(7));
    }

    #[test]
    fn test_patch_quantity_only() {
        let patch: ProductPatch = serde_json::from_str(r#"{"quantity":5}"#).unwrap();
        let mut record = novel();
        patch.apply(&mut record);

        assert_eq!(record.quantity, Some(5));
        assert_eq!(record.price, Some(9.99));
        assert_eq!(record.name.as_deref(), Some("Novel"));
        assert_eq!(record.category_id, 1);
    }

    #[test]
    fn test_patch_ignores_category() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"category":{"id":42},"price":null}"#).unwrap();
        let mut record = novel();
        patch.apply(&mut record);

        assert_eq!(record.category_id, 1);
        assert_eq!(record.price, None);
    }
}
