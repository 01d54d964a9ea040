use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct SaveCartParams {
    pub user_id: UserId,
    pub product_id: i64,
    pub quantity: i32,
}

#[async_trait]
pub trait SaveCartUseCase: Send + Sync {
    async fn execute(&self, params: SaveCartParams) -> Result<Cart, CartError>;
}
