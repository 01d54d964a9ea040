use anyhow::Context;

/// Secret used to verify the HS256 tokens issued by the auth service.
#[derive(Clone)]
pub struct TokenConfig {
    pub api_secret: String,
}

impl TokenConfig {
    /// Environment variables:
    /// - API_SECRET: shared HMAC secret (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_secret = std::env::var("API_SECRET").context("API_SECRET must be set")?;
        Ok(Self { api_secret })
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
