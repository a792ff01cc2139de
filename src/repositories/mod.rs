//! Repository layer for persistence.
//!
//! Services only see [`Repository`]; the concrete store is chosen at startup.

pub mod memory_repository;
pub mod mongo_repository;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Entity, Page, PageRequest};

pub use memory_repository::MemoryRepository;
pub use mongo_repository::MongoRepository;

/// Id-addressed storage for one entity type. Listing is ordered by id.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_page(&self, request: PageRequest) -> Result<Page<T>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError>;

    /// Entities for the ids that exist; missing ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<T>, ApiError>;

    /// Store a new entity under a freshly allocated id and return it.
    /// The id carried by `entity` is ignored.
    async fn insert(&self, entity: T) -> Result<T, ApiError>;

    /// Create or overwrite the entity stored under `entity.id()`.
    async fn save(&self, entity: &T) -> Result<(), ApiError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ApiError>;
}
