//! Category CRUD.

use log::{debug, info, warn};
use std::sync::Arc;
use validator::Validate;

use crate::constants::err_category_not_found;
use crate::errors::ApiError;
use crate::models::{Category, CategoryPatch, CategoryRequest, Page, PageRequest};
use crate::repositories::Repository;
use crate::validators::validation_errors_to_api_error;

pub struct CategoryService {
    repository: Arc<dyn Repository<Category>>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn Repository<Category>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<Category>, ApiError> {
        debug!(
            "Listing categories page {} size {}",
            request.number, request.size
        );
        self.repository.find_page(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category, ApiError> {
        debug!("Fetching category by ID: {}", id);
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Category not found with id: {}", id);
            ApiError::NotFound(err_category_not_found(id))
        })
    }

    pub async fn create(&self, req: CategoryRequest) -> Result<Category, ApiError> {
        let category = req.into_category(0);
        category.validate().map_err(validation_errors_to_api_error)?;

        let saved = self.repository.insert(category).await?;
        info!("Created category {}", saved.id);
        Ok(saved)
    }

    /// Replace every field of an existing category.
    pub async fn replace(&self, id: i64, req: CategoryRequest) -> Result<Category, ApiError> {
        let existing = self.get_by_id(id).await?;

        let category = req.into_category(existing.id);
        category.validate().map_err(validation_errors_to_api_error)?;

        self.repository.save(&category).await?;
        info!("Replaced category {}", id);
        Ok(category)
    }

    /// Overwrite only the fields present in `patch`.
    pub async fn patch(&self, id: i64, patch: CategoryPatch) -> Result<Category, ApiError> {
        let mut category = self.get_by_id(id).await?;
        patch.apply(&mut category);
        category.validate().map_err(validation_errors_to_api_error)?;

        self.repository.save(&category).await?;
        info!("Patched category {}", id);
        Ok(category)
    }

    /// Remove a category and return it as it was. Products keep their reference.
    pub async fn delete(&self, id: i64) -> Result<Category, ApiError> {
        let snapshot = self.get_by_id(id).await?;
        self.repository.delete_by_id(id).await?;
        info!("Deleted category {}", id);
        Ok(snapshot)
    }
}
