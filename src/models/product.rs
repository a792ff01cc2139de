use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::COLLECTION_PRODUCTS;
use crate::models::{Category, Entity};

/// Product document as stored: the category is kept by id only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct ProductRecord {
    pub id: i64,
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i32>,
    pub category_id: i64,
}

impl Entity for ProductRecord {
    const COLLECTION: &'static str = COLLECTION_PRODUCTS;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

/// Product as returned to callers, with its category resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Novel")]
    pub name: Option<String>,
    #[schema(example = "A paperback novel")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    #[schema(example = 3)]
    pub quantity: Option<i32>,
    pub category: Category,
}

impl Product {
    /// Join a stored record with its category.
    ///
    /// `category.id` is expected to equal `record.category_id`.
    pub fn from_record(record: ProductRecord, category: Category) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            quantity: record.quantity,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: 4,
            name: Some("Novel".to_string()),
            description: None,
            price: Some(9.99),
            quantity: Some(3),
            category_id: 1,
        }
    }

    #[test]
    fn test_record_validation() {
        assert!(record().validate().is_ok());

        let negative = ProductRecord {
            price: Some(-1.0),
            quantity: Some(-2),
            ..record()
        };
        let errors = negative.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_from_record_keeps_fields() {
        let product = Product::from_record(record(), Category::detached(1));
        assert_eq!(product.id, 4);
        assert_eq!(product.price, Some(9.99));
        assert_eq!(product.category.id, 1);
        assert_eq!(product.category.name, None);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::from_record(record(), Category::detached(1));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"]["id"], 1);
        assert!(json["description"].is_null());
        assert!(json.get("category_id").is_none());
    }
}
