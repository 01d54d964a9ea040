use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::{Cart, CartChanges, NewCart};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;

const CART_COLUMNS: &str = "id, user_id, product_id, quantity, created_at, updated_at";

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("cart query failed: {err}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Cart>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn upsert(&self, cart: &NewCart) -> Result<Cart, RepositoryError> {
        // Conflicts on idx_carts_user_product merge into the existing row.
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            r#"INSERT INTO carts (user_id, product_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = carts.quantity + EXCLUDED.quantity,
                updated_at = NOW()
            RETURNING {CART_COLUMNS}"#
        ))
        .bind(cart.user_id.value())
        .bind(cart.product_id)
        .bind(cart.quantity)
        .bind(cart.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i64, changes: &CartChanges) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE carts SET
                product_id = COALESCE($2, product_id),
                quantity = COALESCE($3, quantity),
                updated_at = NOW()
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(changes.product_id)
        .bind(changes.quantity)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, user_id: &UserId, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
