use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct FindCartByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait FindCartByIdUseCase: Send + Sync {
    async fn execute(&self, params: FindCartByIdParams) -> Result<Cart, CartError>;
}
