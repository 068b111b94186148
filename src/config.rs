//! Configuration management for the Nirvana Inbox CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and the `.env` file in the state directory. It also owns the layout of
//! the state directory itself, so every component receives its file paths from a
//! [`StatePaths`] value instead of computing them on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the state directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::{Error, Result},
    utils,
};

/// Default SendGrid v3 endpoint for sending mail.
pub const DEFAULT_SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Default Nirvana REST endpoint used for `auth.new`.
pub const DEFAULT_LOGIN_URL: &str = "https://api.nirvanahq.com/?api=rest";

/// Default host probed before every send attempt.
pub const DEFAULT_PROBE_ADDRESS: &str = "api.sendgrid.com:443";

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 3;

const ENV_HOME: &str = "NIN_HOME";
const ENV_API_KEY: &str = "NIN_SENDGRID_API_KEY";
const ENV_SENDER: &str = "NIN_SENDER_EMAIL";
const ENV_INBOX: &str = "NIN_INBOX_ADDRESS";
const ENV_SENDGRID_URL: &str = "NIN_SENDGRID_URL";
const ENV_LOGIN_URL: &str = "NIN_LOGIN_URL";
const ENV_PROBE_ADDRESS: &str = "NIN_PROBE_ADDRESS";
const ENV_PROBE_TIMEOUT: &str = "NIN_PROBE_TIMEOUT_SECS";

/// Locations of every file `nin` persists.
///
/// All paths hang off a single root directory. Tests point the root at a
/// temporary directory; the binary uses [`StatePaths::from_env`].
///
/// # Directory Structure
///
/// The default root is:
/// - Linux: `~/.local/share/nin`
/// - macOS: `~/Library/Application Support/nin`
/// - Windows: `%LOCALAPPDATA%/nin`
#[derive(Debug, Clone)]
pub struct StatePaths {
    pub root: PathBuf,
    pub env: PathBuf,
    pub credentials: PathBuf,
    pub token: PathBuf,
    pub offline: PathBuf,
    pub data: PathBuf,
}

impl StatePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            env: root.join(".env"),
            credentials: root.join(".creds"),
            token: root.join(".authtoken"),
            offline: root.join(".offline"),
            data: root.join(".data"),
            root,
        }
    }

    /// Resolves the state directory from `NIN_HOME`, falling back to the
    /// platform local data directory.
    pub fn from_env() -> Self {
        match env::var_os(ENV_HOME) {
            Some(home) if !home.is_empty() => Self::new(home),
            _ => Self::new(default_root()),
        }
    }
}

fn default_root() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nin");
    path
}

/// Loads environment variables from the `.env` file in the state directory.
///
/// Creates the state directory if it doesn't exist. A missing `.env` file is
/// not an error: the values may come from the process environment, and
/// `nin --install` is the usual way to create the file. Variables that are
/// already set in the environment are never overridden.
///
/// # Errors
///
/// This function will return an error if:
/// - The state directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// # Example
///
/// ```
/// use nin::config::{self, StatePaths};
///
/// #[tokio::main]
/// async fn main() {
///     let paths = StatePaths::from_env();
///     if let Err(e) = config::load_env(&paths).await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env(paths: &StatePaths) -> Result<()> {
    async_fs::create_dir_all(&paths.root).await?;

    if !paths.env.is_file() {
        return Ok(());
    }

    dotenv::from_path(&paths.env).map_err(|e| Error::Config(e.to_string()))?;
    Ok(())
}

/// Writes the provider configuration gathered during `nin --install`.
///
/// The file is replaced atomically and uses the same variable names that
/// [`Settings::from_env`] reads, so the next invocation picks it up through
/// [`load_env`].
pub async fn write_env(
    paths: &StatePaths,
    api_key: &str,
    sender_email: &str,
    inbox_address: &str,
) -> Result<()> {
    let contents = format!(
        "{ENV_API_KEY}={api_key}\n{ENV_SENDER}={sender_email}\n{ENV_INBOX}={inbox_address}\n"
    );
    utils::write_atomic(&paths.env, contents.as_bytes()).await
}

/// Removes the `.env` file. Missing files are ignored.
pub async fn remove_env(paths: &StatePaths) -> Result<()> {
    utils::remove_if_exists(&paths.env).await
}

/// Provider settings resolved from the environment.
///
/// Constructed once per invocation and handed to the clients and the
/// submission service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// SendGrid API key (`NIN_SENDGRID_API_KEY`)
    pub api_key: String,
    /// Verified sender address (`NIN_SENDER_EMAIL`)
    pub sender_email: String,
    /// Personal Nirvana inbox address (`NIN_INBOX_ADDRESS`)
    pub inbox_address: String,
    /// SendGrid send endpoint (`NIN_SENDGRID_URL`)
    pub sendgrid_url: String,
    /// `host:port` probed before sending (`NIN_PROBE_ADDRESS`)
    pub probe_address: String,
    /// Upper bound for the connectivity probe (`NIN_PROBE_TIMEOUT_SECS`)
    pub probe_timeout: Duration,
}

impl Settings {
    /// Reads all settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when one of the required values is missing or
    /// the probe timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let probe_timeout = match env::var(ENV_PROBE_TIMEOUT) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("{ENV_PROBE_TIMEOUT} must be a number of seconds"))
            })?,
            Err(_) => DEFAULT_PROBE_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: required(ENV_API_KEY)?,
            sender_email: required(ENV_SENDER)?,
            inbox_address: required(ENV_INBOX)?,
            sendgrid_url: optional(ENV_SENDGRID_URL, DEFAULT_SENDGRID_URL),
            probe_address: optional(ENV_PROBE_ADDRESS, DEFAULT_PROBE_ADDRESS),
            probe_timeout: Duration::from_secs(probe_timeout),
        })
    }

    /// Nirvana REST endpoint (`NIN_LOGIN_URL`). Login runs before the mail
    /// settings exist, so it is read on its own.
    pub fn login_url_from_env() -> String {
        optional(ENV_LOGIN_URL, DEFAULT_LOGIN_URL)
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::Config(format!(
            "{key} is not set. Run `nin --install` first."
        ))),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
