use crate::{
    clients::{Prompter, TerminalPrompter},
    config,
    error::Result,
    info,
    management::{AuthTokenCache, CredentialStore, OfflineQueue, SubmissionCounter},
    shell, success,
};

use super::{StatePaths, login::authenticate};

pub async fn install(paths: &StatePaths) {
    if let Err(e) = run_install(paths, &TerminalPrompter).await {
        crate::error!("Install failed: {}", e);
    }
    success!("Install completed. Restart your shell.");
}

async fn run_install<P: Prompter>(paths: &StatePaths, prompter: &P) -> Result<()> {
    let profile = shell::profile_path()?;

    // A reinstall starts from a clean alias and fresh credentials; queued
    // items and the submission count survive.
    shell::remove_alias(&profile).await?;
    CredentialStore::new(&paths.credentials).remove().await?;
    AuthTokenCache::new(&paths.token).clear().await?;

    info!("Starting setup...");
    let api_key = prompter.password("SendGrid API key")?;
    let sender_email = prompter.input("Sender e-mail (verified in SendGrid)")?;
    let inbox_address = prompter.input("Nirvana inbox address")?;
    config::write_env(paths, api_key.trim(), sender_email.trim(), inbox_address.trim()).await?;

    let expiry = authenticate(paths, prompter).await?;
    info!("Logged in to Nirvana. Session valid until {}.", expiry);

    let exe = std::env::current_exe()?;
    shell::add_alias(&profile, &shell::alias_line(&exe)).await?;
    success!("'nin' command has been added to {}.", profile.display());
    Ok(())
}

pub async fn uninstall(paths: &StatePaths) {
    let prompter = TerminalPrompter;
    let confirmed = match prompter.confirm(
        "This will remove your data file, api keys, offline store and all other data. Continue?",
    ) {
        Ok(confirmed) => confirmed,
        Err(e) => crate::error!("{}", e),
    };
    if !confirmed {
        return;
    }

    if let Err(e) = remove_everything(paths).await {
        crate::error!("Uninstall failed: {}", e);
    }
    success!("nin uninstalled. Restart your shell.");
}

async fn remove_everything(paths: &StatePaths) -> Result<()> {
    shell::remove_alias(&shell::profile_path()?).await?;
    config::remove_env(paths).await?;
    CredentialStore::new(&paths.credentials).remove().await?;
    AuthTokenCache::new(&paths.token).clear().await?;
    SubmissionCounter::new(&paths.data).remove().await?;
    OfflineQueue::new(&paths.offline).remove_all().await
}

pub async fn reset(paths: &StatePaths) {
    let prompt = format!(
        "WARNING: Continuing will remove data file at {}. Continue?",
        paths.data.display()
    );
    let confirmed = match TerminalPrompter.confirm(&prompt) {
        Ok(confirmed) => confirmed,
        Err(e) => crate::error!("{}", e),
    };
    if !confirmed {
        return;
    }

    match SubmissionCounter::new(&paths.data).remove().await {
        Ok(()) => success!("Data file removed."),
        Err(e) => crate::error!("Failed to remove data file: {}", e),
    }
}
