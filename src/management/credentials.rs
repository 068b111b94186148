use std::path::PathBuf;

use crate::{
    clients::Prompter,
    error::Result,
    types::Credentials,
    utils::{self, compute_md5_hash},
};

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the stored credentials, prompting once and persisting them if
    /// none exist yet. Only the MD5 hash of the password is written to disk.
    pub async fn get<P: Prompter>(&self, prompter: &P) -> Result<Credentials> {
        if let Some(credentials) = self.load().await? {
            return Ok(credentials);
        }

        let username = prompter.input("Nirvana E-Mail")?;
        let secret = prompter.password("Password")?;
        let credentials = Credentials {
            username: username.trim().to_string(),
            secret_hash: compute_md5_hash(&secret),
        };

        utils::write_json(&self.path, &credentials).await?;
        Ok(credentials)
    }

    pub async fn load(&self) -> Result<Option<Credentials>> {
        utils::read_json(&self.path).await
    }

    pub async fn remove(&self) -> Result<()> {
        utils::remove_if_exists(&self.path).await
    }
}
