//! # Clients Module
//!
//! This module provides the capabilities `nin` depends on but does not own: sending
//! mail, logging in to Nirvana, checking whether the network is reachable, and
//! asking the user for input. Each capability is a small trait so the submission
//! service and the stores can be exercised with recording stubs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Service, Management)
//!          ↓
//! Capability Traits
//!     ├── Mailer        -> SendGridMailer   (SendGrid v3 mail/send)
//!     ├── Login         -> NirvanaLogin     (Nirvana auth.new)
//!     ├── Connectivity  -> TcpProbe         (TCP connect with timeout)
//!     └── Prompter      -> TerminalPrompter (dialoguer)
//!          ↓
//! HTTP / TCP (reqwest, tokio)
//! ```
//!
//! ## Failure Contract
//!
//! Capabilities never surface transport errors as panics. The mailer returns the
//! provider status code or [`Error::Transport`], the login returns `None` when no
//! usable token came back, and the probe answers a plain `bool`. Classification
//! into queueing outcomes happens in [`crate::service`].

mod nirvana;
mod probe;
mod prompt;
mod sendgrid;

pub use nirvana::NirvanaLogin;
pub use probe::TcpProbe;
pub use prompt::TerminalPrompter;
pub use sendgrid::SendGridMailer;

use crate::{
    error::{Error, Result},
    types::{AuthToken, Envelope},
};

/// Status codes the mail provider uses to acknowledge a message.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// Sends one message and reports the provider's HTTP status code.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, envelope: &Envelope) -> Result<u16>;
}

/// Exchanges a username and password hash for a session token.
#[allow(async_fn_in_trait)]
pub trait Login {
    async fn login(&self, username: &str, secret_hash: &str) -> Option<AuthToken>;
}

/// Pre-flight check run before every send attempt.
#[allow(async_fn_in_trait)]
pub trait Connectivity {
    async fn is_online(&self) -> bool;
}

/// Interactive questions asked during setup.
pub trait Prompter {
    fn input(&self, prompt: &str) -> Result<String>;
    fn password(&self, prompt: &str) -> Result<String>;
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
