use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

pub struct UpdateCartParams {
    pub id: i64,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

#[async_trait]
pub trait UpdateCartUseCase: Send + Sync {
    /// Returns the number of updated rows.
    async fn execute(&self, params: UpdateCartParams) -> Result<u64, CartError>;
}
