use crate::error::ApiError;

/// Pluggable token provider, consulted before every API request.
///
/// The platform shell owns session acquisition (cookies, OAuth redirects,
/// whatever the host environment does) and hands the resulting bearer
/// token in through an implementation of this trait. `Ok(None)` means
/// anonymous: the Authorization header is skipped.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Result<Option<String>, ApiError>;
}

/// No authentication — anonymous browsing.
pub struct NoAuth;

#[async_trait::async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// Fixed bearer token obtained externally by the shell.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(Some(self.0.clone()))
    }
}
