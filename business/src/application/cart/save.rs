use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, NewCart};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::save::{SaveCartParams, SaveCartUseCase};
use crate::domain::logger::Logger;

pub struct SaveCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveCartUseCase for SaveCartUseCaseImpl {
    async fn execute(&self, params: SaveCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of user {}",
            params.product_id, params.user_id
        ));

        let new_cart = NewCart::new(params.user_id, params.product_id, params.quantity)?;

        // A product appears at most once per user cart; repeated adds bump the quantity.
        let cart = self.repository.upsert(&new_cart).await?;

        self.logger.info(&format!(
            "Cart {} holds product {} with quantity {}",
            cart.id, cart.product_id, cart.quantity
        ));
        Ok(cart)
    }
}
