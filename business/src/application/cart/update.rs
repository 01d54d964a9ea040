use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartChanges;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update::{UpdateCartParams, UpdateCartUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartUseCase for UpdateCartUseCaseImpl {
    async fn execute(&self, params: UpdateCartParams) -> Result<u64, CartError> {
        self.logger.info(&format!("Updating cart: {}", params.id));

        let changes = CartChanges::new(params.product_id, params.quantity)?;
        let count = self.repository.update(params.id, &changes).await?;

        if count == 0 {
            self.logger
                .warn(&format!("No cart with id {} to update", params.id));
        } else {
            self.logger.info(&format!("Cart updated: {}", params.id));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, NewCart};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<Cart>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
            async fn upsert(&self, cart: &NewCart) -> Result<Cart, RepositoryError>;
            async fn update(&self, id: i64, changes: &CartChanges) -> Result<u64, RepositoryError>;
            async fn delete(&self, user_id: &UserId, id: i64) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_updated_row_count() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 4 && changes.quantity == Some(6) && changes.product_id.is_none()
            })
            .returning(|_, _| Ok(1));

        let use_case = UpdateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartParams {
                id: 4,
                product_id: None,
                quantity: Some(6),
            })
            .await;

        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_return_zero_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_update().returning(|_, _| Ok(0));

        let use_case = UpdateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartParams {
                id: 404,
                product_id: Some(3),
                quantity: None,
            })
            .await;

        assert_eq!(result.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartParams {
                id: 4,
                product_id: None,
                quantity: Some(-1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
