//! Product CRUD with the category reference rule.
//!
//! Every write resolves the referenced category first. Reads never fail on a
//! dangling reference; the category comes back with only its id.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::constants::{err_category_not_found, err_product_not_found, ERR_CATEGORY_REQUIRED};
use crate::errors::ApiError;
use crate::models::{
    Category, Page, PageRequest, Product, ProductPatch, ProductRecord, ProductRequest,
};
use crate::repositories::Repository;
use crate::validators::validation_errors_to_api_error;

pub struct ProductService {
    products: Arc<dyn Repository<ProductRecord>>,
    categories: Arc<dyn Repository<Category>>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn Repository<ProductRecord>>,
        categories: Arc<dyn Repository<Category>>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<Product>, ApiError> {
        debug!(
            "Listing products page {} size {}",
            request.number, request.size
        );
        let page = self.products.find_page(request).await?;

        let mut ids: Vec<i64> = page.content.iter().map(|p| p.category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let categories: HashMap<i64, Category> = self
            .categories
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Ok(page.map(|record| {
            let category = categories
                .get(&record.category_id)
                .cloned()
                .unwrap_or_else(|| Category::detached(record.category_id));
            Product::from_record(record, category)
        }))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, ApiError> {
        debug!("Fetching product by ID: {}", id);
        let record = self.find_record(id).await?;
        self.hydrate(record).await
    }

    pub async fn create(&self, req: ProductRequest) -> Result<Product, ApiError> {
        let category_id = req.category_id().ok_or_else(|| {
            warn!("Product create rejected: no category reference");
            ApiError::BadRequest(ERR_CATEGORY_REQUIRED.to_string())
        })?;
        let category = self.resolve_category(category_id).await?;

        let record = req.into_record(0, category.id);
        record.validate().map_err(validation_errors_to_api_error)?;

        let saved = self.products.insert(record).await?;
        info!("Created product {} in category {}", saved.id, category.id);
        Ok(Product::from_record(saved, category))
    }

    /// Replace every field of an existing product.
    ///
    /// Without a category id in the body the current reference is kept, even
    /// if that category has since been deleted.
    pub async fn replace(&self, id: i64, req: ProductRequest) -> Result<Product, ApiError> {
        let existing = self.find_record(id).await?;

        let category = match req.category_id() {
            Some(category_id) => self.resolve_category(category_id).await?,
            None => self.category_or_detached(existing.category_id).await?,
        };

        let record = req.into_record(existing.id, category.id);
        record.validate().map_err(validation_errors_to_api_error)?;

        self.products.save(&record).await?;
        info!("Replaced product {}", id);
        Ok(Product::from_record(record, category))
    }

    /// Overwrite only the fields present in `patch`; the category is untouched.
    pub async fn patch(&self, id: i64, patch: ProductPatch) -> Result<Product, ApiError> {
        let mut record = self.find_record(id).await?;
        patch.apply(&mut record);
        record.validate().map_err(validation_errors_to_api_error)?;

        self.products.save(&record).await?;
        info!("Patched product {}", id);
        self.hydrate(record).await
    }

    /// Remove a product and return it as it was.
    pub async fn delete(&self, id: i64) -> Result<Product, ApiError> {
        let snapshot = self.get_by_id(id).await?;
        self.products.delete_by_id(id).await?;
        info!("Deleted product {}", id);
        Ok(snapshot)
    }

    async fn find_record(&self, id: i64) -> Result<ProductRecord, ApiError> {
        self.products.find_by_id(id).await?.ok_or_else(|| {
            warn!("Product not found with id: {}", id);
            ApiError::NotFound(err_product_not_found(id))
        })
    }

    /// Load a category that a write is about to reference.
    async fn resolve_category(&self, id: i64) -> Result<Category, ApiError> {
        self.categories.find_by_id(id).await?.ok_or_else(|| {
            warn!("Referenced category not found with id: {}", id);
            ApiError::NotFound(err_category_not_found(id))
        })
    }

    async fn category_or_detached(&self, id: i64) -> Result<Category, ApiError> {
        Ok(self
            .categories
            .find_by_id(id)
            .await?
            .unwrap_or_else(|| Category::detached(id)))
    }

    async fn hydrate(&self, record: ProductRecord) -> Result<Product, ApiError> {
        let category = self.category_or_detached(record.category_id).await?;
        Ok(Product::from_record(record, category))
    }
}
