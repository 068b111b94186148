//! # CLI Module
//!
//! This module provides the command-line interface layer for `nin`. It parses the
//! command line into an [`Action`] and implements every user-facing command on top
//! of the submission service, the local stores and the installer helpers.
//!
//! ## Commands
//!
//! - [`submit`] - Sends `TASK [// NOTE]` to the Nirvana inbox, queueing it offline on failure
//! - [`refresh`] - Replays the offline queue
//! - [`status`] - Shows the submission count and queued items
//! - [`login`] - Validates or renews the Nirvana session token
//! - [`install`] / [`uninstall`] / [`reset`] - Setup and cleanup of local state
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Service Layer (Submission, Offline Replay)
//!     ↓
//! Management Layer (Credentials, Token, Queue, Counter)
//!     ↓
//! Clients (SendGrid, Nirvana, Connectivity Probe)
//! ```
//!
//! ## Error Handling
//!
//! Delivery failures are never fatal: the item is queued and the user is told it
//! was saved for later. Login failures, unreadable state files and missing
//! configuration abort the invocation through [`crate::error!`] with exit code 1.
//! Command-line errors (unknown flags) are reported by clap before any command
//! runs.

mod args;
mod login;
mod refresh;
mod setup;
mod status;
mod submit;

pub use args::Action;
pub use args::Cli;
pub use login::login;
pub use refresh::refresh;
pub use setup::install;
pub use setup::reset;
pub use setup::uninstall;
pub use status::status;
pub use submit::submit;

pub use crate::config::StatePaths;

use crate::{
    clients::{SendGridMailer, TcpProbe},
    config::Settings,
    error,
    management::{OfflineQueue, SubmissionCounter},
    service::InboxService,
};

fn load_settings() -> Settings {
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    }
}

fn inbox_service(paths: &StatePaths, settings: &Settings) -> InboxService<SendGridMailer, TcpProbe> {
    InboxService::from_settings(
        settings,
        SendGridMailer::new(settings),
        TcpProbe::from_settings(settings),
        OfflineQueue::new(&paths.offline),
        SubmissionCounter::new(&paths.data),
    )
}
