use std::path::PathBuf;

use crate::{
    clients::Login,
    error::Result,
    types::{AuthToken, Credentials},
    utils,
};

pub struct AuthTokenCache {
    path: PathBuf,
}

impl AuthTokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a session token, logging in again only when the cached one is
    /// missing or expired.
    ///
    /// `Ok(None)` means the login capability gave no usable token; callers that
    /// need authentication must abort.
    pub async fn get_token<L: Login>(
        &self,
        credentials: &Credentials,
        login: &L,
    ) -> Result<Option<String>> {
        if let Some(cached) = self.load().await? {
            if !is_expired(&cached, utils::now_timestamp()) {
                return Ok(Some(cached.token));
            }
        }

        let Some(fresh) = login
            .login(&credentials.username, &credentials.secret_hash)
            .await
        else {
            return Ok(None);
        };

        self.persist(&fresh).await?;
        Ok(Some(fresh.token))
    }

    pub async fn load(&self) -> Result<Option<AuthToken>> {
        utils::read_json(&self.path).await
    }

    pub async fn persist(&self, token: &AuthToken) -> Result<()> {
        utils::write_json(&self.path, token).await
    }

    pub async fn clear(&self) -> Result<()> {
        utils::remove_if_exists(&self.path).await
    }
}

// Whole seconds; a token that expires mid-request is still used.
fn is_expired(token: &AuthToken, now: i64) -> bool {
    now >= token.expiry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_valid_until_expiry_second() {
        let token = AuthToken {
            token: "abc".to_string(),
            expiry: 1_000,
        };
        assert!(!is_expired(&token, 999));
        assert!(is_expired(&token, 1_000));
        assert!(is_expired(&token, 1_001));
    }
}
