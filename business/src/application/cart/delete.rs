use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<u64, CartError> {
        self.logger.info(&format!(
            "Deleting cart {} of user {}",
            params.id, params.user_id
        ));

        let count = self.repository.delete(&params.user_id, params.id).await?;

        self.logger
            .info(&format!("Deleted {} cart rows for id {}", count, params.id));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartChanges, NewCart};
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
    async fn should_delete_cart_owned_by_user() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete()
            .withf(|user_id, id| user_id.value() == 2 && *id == 8)
            .returning(|_, _| Ok(1));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: UserId::new(2),
                id: 8,
            })
            .await;

        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_return_zero_when_cart_belongs_to_someone_else() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_delete().returning(|_, _| Ok(0));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: UserId::new(3),
                id: 8,
            })
            .await;

        assert_eq!(result.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_propagate_database_error() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: UserId::new(2),
                id: 8,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
