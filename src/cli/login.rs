use chrono::DateTime;

use crate::{
    clients::{NirvanaLogin, Prompter, TerminalPrompter},
    config::Settings,
    error::{Error, Result},
    management::{AuthTokenCache, CredentialStore},
    success,
};

use super::StatePaths;

pub async fn login(paths: &StatePaths) {
    match authenticate(paths, &TerminalPrompter).await {
        Ok(expiry) => success!("Logged in to Nirvana. Session valid until {}.", expiry),
        Err(e) => crate::error!("{}", e),
    }
}

/// Makes sure a valid session token is cached, prompting for credentials the
/// first time. Returns the token expiry as a readable timestamp.
pub(crate) async fn authenticate<P: Prompter>(paths: &StatePaths, prompter: &P) -> Result<String> {
    let credentials = CredentialStore::new(&paths.credentials)
        .get(prompter)
        .await?;

    let cache = AuthTokenCache::new(&paths.token);
    let client = NirvanaLogin::new(Settings::login_url_from_env());
    if cache.get_token(&credentials, &client).await?.is_none() {
        return Err(Error::AuthFailure);
    }

    let expiry = cache
        .load()
        .await?
        .and_then(|token| DateTime::from_timestamp(token.expiry, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    Ok(expiry)
}
