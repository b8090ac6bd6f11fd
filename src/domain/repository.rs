//! Backend port traits.
//!
//! ドメイン層が定義する backend trait。インフラ層が具体的な実装を提供し、
//! UseCase 層は trait にのみ依存します（依存性の逆転）。
//!
//! Two ports, one per backend: the REST API covers listing and creation,
//! the direct-store path covers deletion. Creation goes through the REST
//! API only and never falls back to the store mutator.

use async_trait::async_trait;

use super::{
    entity::Room,
    error::{DirectoryError, StoreError},
    value_object::{RoomCategory, RoomName},
};

/// Read/create access to the category-scoped room collections of the
/// remote server's REST API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// List all rooms of the given category, preserving server order.
    /// An empty collection is a valid, non-error result.
    async fn list(&self, category: RoomCategory) -> Result<Vec<Room>, DirectoryError>;

    /// Create a room of the given category.
    async fn create(
        &self,
        category: RoomCategory,
        name: &RoomName,
    ) -> Result<(), DirectoryError>;
}

/// Deletion access to the server's backing store.
///
/// The deletion mechanism matches by exact name only; `category` is carried
/// for log messaging and does not filter the mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Delete the room with the given name, verifying the post-condition
    /// by re-query.
    async fn delete(&self, name: &RoomName, category: RoomCategory) -> Result<(), StoreError>;
}
