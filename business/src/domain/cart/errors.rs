use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CartError {
    /// Maps a repository miss onto the cart-level `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CartError::NotFound,
            other => CartError::Repository(other),
        }
    }
}
