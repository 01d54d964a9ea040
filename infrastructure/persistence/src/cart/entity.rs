use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::Cart;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            self.quantity,
            self.created_at,
            self.updated_at,
        )
    }
}
