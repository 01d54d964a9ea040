use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteCartParams {
    pub user_id: UserId,
    pub id: i64,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    /// Returns the number of deleted rows.
    async fn execute(&self, params: DeleteCartParams) -> Result<u64, CartError>;
}
