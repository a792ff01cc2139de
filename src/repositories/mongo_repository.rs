//! MongoDB-backed repository.
//!
//! Entities keep their numeric id in an `id` field (unique index); MongoDB's
//! own `_id` is left to the driver. New ids come from an atomic `$inc` on the
//! `counters` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use super::Repository;
use crate::constants::{COLLECTION_COUNTERS, ERR_COUNTER_UNAVAILABLE};
use crate::errors::ApiError;
use crate::models::{Entity, Page, PageRequest};

/// Repository for one entity collection.
pub struct MongoRepository<T: Entity> {
    collection: Collection<T>,
    counters: Collection<Document>,
}

impl<T: Entity> MongoRepository<T> {
    /// Create a new MongoRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
            counters: db.collection(COLLECTION_COUNTERS),
        }
    }

    /// Create the unique index on `id`.
    ///
    /// Call once during application startup.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for {} collection...", T::COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created for {}", T::COLLECTION);
        Ok(())
    }

    async fn next_id(&self) -> Result<i64, ApiError> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": T::COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_COUNTER_UNAVAILABLE.to_string()))?;

        Ok(counter.get_i64("seq")?)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    async fn find_page(&self, request: PageRequest) -> Result<Page<T>, ApiError> {
        debug!(
            "Repository: Finding page {} (size {}) of {}",
            request.number,
            request.size,
            T::COLLECTION
        );
        let total = self.collection.count_documents(doc! {}).await?;
        if request.starts_after(total) {
            // skip is sent as i64; past the end there is nothing to fetch
            return Ok(Page::new(Vec::new(), request, total));
        }
        let limit = i64::try_from(request.size).unwrap_or(i64::MAX);

        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .skip(request.offset())
            .limit(limit)
            .await?;

        Ok(Page::new(cursor.try_collect().await?, request, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        debug!("Repository: Finding {} by id: {}", T::COLLECTION, id);
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<T>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, entity: T) -> Result<T, ApiError> {
        let entity = entity.with_id(self.next_id().await?);
        self.collection.insert_one(&entity).await?;
        debug!("Repository: Inserted {} id {}", T::COLLECTION, entity.id());
        Ok(entity)
    }

    async fn save(&self, entity: &T) -> Result<(), ApiError> {
        self.collection
            .replace_one(doc! { "id": entity.id() }, entity)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
