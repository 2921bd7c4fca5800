use async_trait::async_trait;

use crate::core::error::Result;

/// Base repository trait for CRUD operations
/// All storage collaborators should implement this trait for consistency
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Insert a batch of new entities, returning them with store-assigned ids
    async fn insert_batch(&self, entities: Vec<T>) -> Result<Vec<T>>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Update an existing entity
    async fn update(&self, id: ID, entity: T) -> Result<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;

    /// List all entities
    async fn fetch_all(&self) -> Result<Vec<T>>;
}
