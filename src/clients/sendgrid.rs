use reqwest::Client;

use crate::{
    config::Settings,
    error::{Error, Result},
    types::{Envelope, SendMailRequest},
};

use super::Mailer;

/// Sends inbox mail through the SendGrid v3 `mail/send` endpoint.
pub struct SendGridMailer {
    client: Client,
    url: String,
    api_key: String,
}

impl SendGridMailer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            url: settings.sendgrid_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

impl Mailer for SendGridMailer {
    /// Posts the envelope and returns the response status.
    ///
    /// Non-success statuses are returned as values, not errors; only failures to
    /// get any response at all become [`Error::Transport`].
    async fn send(&self, envelope: &Envelope) -> Result<u16> {
        let body = SendMailRequest::from(envelope);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
