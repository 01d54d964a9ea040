use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::find_all::{FindAllCartsParams, FindAllCartsUseCase};
use crate::domain::logger::Logger;

pub struct FindAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindAllCartsUseCase for FindAllCartsUseCaseImpl {
    async fn execute(&self, params: FindAllCartsParams) -> Result<Vec<Cart>, CartError> {
        self.logger
            .info(&format!("Getting all carts of user {}", params.user_id));
        let carts = self.repository.get_all(&params.user_id).await?;
        self.logger.info(&format!("Retrieved {} carts", carts.len()));
        Ok(carts)
    }
}
