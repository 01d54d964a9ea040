use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;

/// A persisted cart entry: one product line in a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i64,
    pub user_id: UserId,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        user_id: UserId,
        product_id: i64,
        quantity: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            created_at,
            updated_at,
        }
    }
}

/// A cart entry that has not been stored yet. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub user_id: UserId,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl NewCart {
    pub fn new(user_id: UserId, product_id: i64, quantity: i32) -> Result<Self, CartError> {
        validate_quantity(quantity)?;

        Ok(Self {
            user_id,
            product_id,
            quantity,
            created_at: Utc::now(),
        })
    }
}

/// Partial update of a cart entry. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartChanges {
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

impl CartChanges {
    pub fn new(product_id: Option<i64>, quantity: Option<i32>) -> Result<Self, CartError> {
        if let Some(quantity) = quantity {
            validate_quantity(quantity)?;
        }

        Ok(Self {
            product_id,
            quantity,
        })
    }
}

fn validate_quantity(quantity: i32) -> Result<(), CartError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_new_cart_when_quantity_positive() {
        let result = NewCart::new(UserId::new(1), 10, 3);

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.user_id, UserId::new(1));
        assert_eq!(cart.product_id, 10);
        assert_eq!(cart.quantity, 3);
    }

    #[test]
    fn should_reject_new_cart_when_quantity_zero() {
        let result = NewCart::new(UserId::new(1), 10, 0);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[test]
    fn should_reject_new_cart_when_quantity_negative() {
        let result = NewCart::new(UserId::new(1), 10, -4);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[test]
    fn should_accept_empty_changes() {
        let changes = CartChanges::new(None, None).unwrap();

        assert_eq!(changes, CartChanges::default());
    }

    #[test]
    fn should_reject_changes_with_non_positive_quantity() {
        let result = CartChanges::new(Some(2), Some(0));

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
