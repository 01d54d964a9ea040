use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("auth.token_missing")]
    Missing,
    #[error("auth.token_invalid: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
    #[error("auth.user_id_missing")]
    MissingUserId,
}

/// Claims carried by the shop's access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: Option<i64>,
    pub exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Reads the caller's identity from an HS256 access token.
pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Resolves the user id of the request. Failures are logged at warn level.
    pub fn user_id(&self, req: &Request) -> Result<UserId, TokenError> {
        self.resolve(req).inspect_err(|e| {
            tracing::warn!("token resolution failed for {}: {e}", req.uri().path());
        })
    }

    fn resolve(&self, req: &Request) -> Result<UserId, TokenError> {
        let token = extract_token(req).ok_or(TokenError::Missing)?;
        let data = decode::<AccessClaims>(&token, &self.decoding_key, &self.validation)?;
        data.claims
            .user_id
            .map(UserId::new)
            .ok_or(TokenError::MissingUserId)
    }
}

/// The `token` query parameter wins over the `Authorization: Bearer` header.
fn extract_token(req: &Request) -> Option<String> {
    if let Ok(TokenQuery { token: Some(token) }) = req.params::<TokenQuery>()
        && !token.is_empty()
    {
        return Some(token);
    }

    let value = req.header("authorization")?;
    let mut parts = value.splitn(2, ' ');
    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
