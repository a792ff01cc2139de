//! Marker trait for documents the repositories can store.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted entity identified by a server-generated numeric id.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection the entity lives in; also names its id counter.
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    /// Returns the entity with its id replaced.
    fn with_id(self, id: i64) -> Self;
}
