use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No network reachable, detected before contacting the provider.
    #[error("no network connection")]
    Connectivity,

    /// The mail provider answered, but not with a success status.
    #[error("mail provider rejected the message with status {status}")]
    ProviderRejection { status: u16 },

    /// The request to the mail provider failed after the connectivity check passed.
    #[error("mail provider request failed: {0}")]
    Transport(String),

    #[error("login failed, no session token received")]
    AuthFailure,

    #[error("local state at {} is unreadable: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl Error {
    /// Whether the failure is recovered by keeping the item in the offline queue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Connectivity | Error::ProviderRejection { .. } | Error::Transport(_)
        )
    }
}
