use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Cart, CartChanges, NewCart};

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Cart>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
    /// Inserts the entry, or adds its quantity to the user's existing entry for
    /// the same product. Returns the stored row either way.
    async fn upsert(&self, cart: &NewCart) -> Result<Cart, RepositoryError>;
    /// Returns the number of rows updated.
    async fn update(&self, id: i64, changes: &CartChanges) -> Result<u64, RepositoryError>;
    /// Returns the number of rows deleted. Only rows owned by `user_id` are removed.
    async fn delete(&self, user_id: &UserId, id: i64) -> Result<u64, RepositoryError>;
}
