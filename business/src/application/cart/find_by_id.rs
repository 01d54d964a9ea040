use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::find_by_id::{FindCartByIdParams, FindCartByIdUseCase};
use crate::domain::logger::Logger;

pub struct FindCartByIdUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindCartByIdUseCase for FindCartByIdUseCaseImpl {
    async fn execute(&self, params: FindCartByIdParams) -> Result<Cart, CartError> {
        self.logger.info(&format!("Fetching cart by id: {}", params.id));

        let cart = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(CartError::from_lookup)?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartChanges, NewCart};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
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
    async fn should_return_cart_when_found() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 3)
            .returning(|id| {
                Ok(Cart::from_repository(
                    id,
                    UserId::new(1),
                    10,
                    2,
                    Utc::now(),
                    Utc::now(),
                ))
            });

        let use_case = FindCartByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(FindCartByIdParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(cart.id, 3);
        assert_eq!(cart.quantity, 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = FindCartByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(FindCartByIdParams { id: 99 }).await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_database_error_distinct_from_not_found() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = FindCartByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(FindCartByIdParams { id: 99 }).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
