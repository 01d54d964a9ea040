use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::Cart;

/// Payload for adding a product to the caller's cart
#[derive(Debug, Clone, Object)]
pub struct AddCartRequest {
    /// Product to add
    #[oai(validator(minimum(value = "1")))]
    pub product_id: i64,
    /// Number of units, at least 1
    #[oai(validator(minimum(value = "1")))]
    pub quantity: i32,
}

/// Payload for updating a cart entry. Omitted fields are left unchanged.
#[derive(Debug, Clone, Object)]
pub struct UpdateCartRequest {
    #[oai(validator(minimum(value = "1")), skip_serializing_if_is_none)]
    pub product_id: Option<i64>,
    #[oai(validator(minimum(value = "1")), skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart entry identifier
    pub id: i64,
    /// Owner of the entry
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id.value(),
            product_id: cart.product_id,
            quantity: cart.quantity,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// `{"Status": true, "data": <cart>}`
#[derive(Debug, Clone, Object)]
pub struct CartEnvelope {
    #[oai(rename = "Status")]
    pub status: bool,
    pub data: CartResponse,
}

impl From<Cart> for CartEnvelope {
    fn from(cart: Cart) -> Self {
        Self {
            status: true,
            data: cart.into(),
        }
    }
}

/// `{"Status": true, "data": [<cart>, ...]}`
#[derive(Debug, Clone, Object)]
pub struct CartListEnvelope {
    #[oai(rename = "Status")]
    pub status: bool,
    pub data: Vec<CartResponse>,
}

impl From<Vec<Cart>> for CartListEnvelope {
    fn from(carts: Vec<Cart>) -> Self {
        Self {
            status: true,
            data: carts.into_iter().map(CartResponse::from).collect(),
        }
    }
}
