use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "u")]
    pub username: String,
    #[serde(rename = "p")]
    pub secret_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub expiry: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineItem {
    pub task: String,
    pub note: String,
}

impl OfflineItem {
    pub fn new(task: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            note: note.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionData {
    pub submission_count: u64,
}

/// Outbound message handed to the send capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Which path a submission came from. Only `Online` submissions may drain the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NoNetwork,
    Rejected,
}

/// Result of a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Acknowledged by the provider.
    Sent,
    /// Failed on the online path and appended to the offline queue.
    Queued(FailureReason),
    /// Failed while replaying; the item stays where it was in the queue.
    Retained(FailureReason),
}

/// Outcome of one attempt as seen by the offline queue.
///
/// Separates errors raised after the provider acknowledged the message from
/// errors raised before it, so an acknowledged item never stays queued.
#[derive(Debug)]
pub enum Attempt {
    Done(Submission),
    /// Acknowledged by the provider, then a local write failed.
    SentWithError(Error),
    /// Failed before the provider acknowledged anything.
    Failed(Error),
}

impl Attempt {
    pub fn into_result(self) -> Result<Submission> {
        match self {
            Attempt::Done(outcome) => Ok(outcome),
            Attempt::SentWithError(e) | Attempt::Failed(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainSummary {
    pub replayed: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub outcome: Submission,
    /// Present only when the online submission succeeded and the queue was replayed.
    pub drained: Option<DrainSummary>,
}

// Nirvana `auth.new` response

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub results: Vec<LoginResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResult {
    pub auth: Option<LoginAuth>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginAuth {
    pub token: String,
    pub expires: Expiry,
}

/// The API has been seen returning `expires` both as a number and as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Expiry {
    Number(i64),
    Text(String),
}

impl Expiry {
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            Expiry::Number(n) => Some(*n),
            Expiry::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl LoginResponse {
    /// Extracts `results[0].auth` as a token, if the response carries one.
    pub fn into_token(self) -> Option<AuthToken> {
        let auth = self.results.into_iter().next()?.auth?;
        let expiry = auth.expires.as_timestamp()?;
        if auth.token.is_empty() {
            return None;
        }
        Some(AuthToken {
            token: auth.token,
            expiry,
        })
    }
}

// SendGrid v3 mail/send request

#[derive(Debug, Clone, Serialize)]
pub struct SendMailRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<MailContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailAddress {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MailContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl From<&Envelope> for SendMailRequest {
    fn from(envelope: &Envelope) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: envelope.to.clone(),
                }],
            }],
            from: EmailAddress {
                email: envelope.from.clone(),
            },
            subject: envelope.subject.clone(),
            content: vec![MailContent {
                content_type: "text/plain".to_string(),
                value: envelope.body.clone(),
            }],
        }
    }
}

#[derive(Tabled)]
pub struct QueueTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub task: String,
    pub note: String,
}
