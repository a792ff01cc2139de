//! In-process repository used for local runs and tests.

use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::Repository;
use crate::errors::ApiError;
use crate::models::{Entity, Page, PageRequest};

pub struct MemoryRepository<T> {
    records: RwLock<BTreeMap<i64, T>>,
    last_id: AtomicI64,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_page(&self, request: PageRequest) -> Result<Page<T>, ApiError> {
        let records = self.records.read().await;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);

        let content: Vec<T> = records.values().skip(offset).take(size).cloned().collect();
        debug!(
            "Memory: page {} of {} ({} items)",
            request.number,
            T::COLLECTION,
            content.len()
        );
        Ok(Page::new(content, request, records.len() as u64))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<T>, ApiError> {
        let records = self.records.read().await;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    async fn insert(&self, entity: T) -> Result<T, ApiError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let entity = entity.with_id(id);
        self.records.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: &T) -> Result<(), ApiError> {
        let id = entity.id();
        // keep later inserts from reusing an id written here
        self.last_id.fetch_max(id, Ordering::SeqCst);
        self.records.write().await.insert(id, entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn category(name: &str) -> Category {
        Category {
            id: 0,
            name: Some(name.to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = MemoryRepository::<Category>::new();
        let first = repo.insert(category("Books")).await.unwrap();
        let second = repo.insert(category("Music")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = MemoryRepository::<Category>::new();
        let first = repo.insert(category("Books")).await.unwrap();
        assert!(repo.delete_by_id(first.id).await.unwrap());
        assert!(!repo.delete_by_id(first.id).await.unwrap());

        let second = repo.insert(category("Music")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_page_slices_in_id_order() {
        let repo = MemoryRepository::<Category>::new();
        for n in 0..5 {
            repo.insert(category(&format!("c{}", n))).await.unwrap();
        }

        let page = repo.find_page(PageRequest::new(1, 2)).await.unwrap();
        let ids: Vec<i64> = page.content.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 3);

        let past_end = repo.find_page(PageRequest::new(9, 2)).await.unwrap();
        assert!(past_end.content.is_empty());
        assert_eq!(past_end.number, 9);
    }

    #[tokio::test]
    async fn test_save_overwrites_and_find_by_ids_skips_missing() {
        let repo = MemoryRepository::<Category>::new();
        let mut books = repo.insert(category("Books")).await.unwrap();
        books.description = Some("Paper".to_string());
        repo.save(&books).await.unwrap();

        let found = repo.find_by_ids(&[books.id, 77]).await.unwrap();
        assert_eq!(found, vec![books]);
    }
}
