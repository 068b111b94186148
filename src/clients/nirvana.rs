use reqwest::Client;

use crate::types::{AuthToken, LoginResponse};

use super::Login;

/// Logs in against the Nirvana REST API (`method=auth.new`).
pub struct NirvanaLogin {
    client: Client,
    url: String,
}

impl NirvanaLogin {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Login for NirvanaLogin {
    async fn login(&self, username: &str, secret_hash: &str) -> Option<AuthToken> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("method", "auth.new"), ("u", username), ("p", secret_hash)])
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;

        let body: LoginResponse = response.json().await.ok()?;
        body.into_token()
    }
}
