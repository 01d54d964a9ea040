use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;

use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::find_all::FindAllCartsUseCaseImpl;
use business::application::cart::find_by_id::FindCartByIdUseCaseImpl;
use business::application::cart::save::SaveCartUseCaseImpl;
use business::application::cart::update::UpdateCartUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::security::TokenService;
use crate::config::token_config::TokenConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, token_config: &TokenConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));
        let tokens = Arc::new(TokenService::new(&token_config.api_secret));

        // Cart use cases
        let save_use_case = Arc::new(SaveCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let find_all_use_case = Arc::new(FindAllCartsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let find_by_id_use_case = Arc::new(FindCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let cart_api = CartApi::new(
            save_use_case,
            find_all_use_case,
            find_by_id_use_case,
            update_use_case,
            delete_use_case,
            tokens,
        );

        Self {
            health_api: HealthApi,
            cart_api,
        }
    }
}
