use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    utils,
};

/// Every profile line starting with this belongs to `nin`.
pub const ALIAS_PREFIX: &str = "alias nin";

/// Picks the profile file for the user's login shell.
pub fn profile_for_shell(home: &Path, shell: Option<&str>) -> PathBuf {
    let shell = shell.unwrap_or_default();
    let file = if shell.ends_with("zsh") {
        ".zshrc"
    } else if shell.ends_with("bash") {
        ".bashrc"
    } else {
        ".profile"
    };
    home.join(file)
}

/// Profile of the current user, based on `$SHELL`.
pub fn profile_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))?;
    let shell = std::env::var("SHELL").ok();
    Ok(profile_for_shell(&home, shell.as_deref()))
}

pub fn alias_line(exe: &Path) -> String {
    format!("{ALIAS_PREFIX}='{}'", exe.display())
}

pub async fn add_alias(profile: &Path, line: &str) -> Result<()> {
    let mut content = read_profile(profile).await?;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(line);
    content.push('\n');
    utils::write_atomic(profile, content.as_bytes()).await
}

/// Drops all `nin` alias lines. Returns whether anything was removed.
pub async fn remove_alias(profile: &Path) -> Result<bool> {
    let content = read_profile(profile).await?;
    let kept: Vec<&str> = content
        .lines()
        .filter(|line| !line.starts_with(ALIAS_PREFIX))
        .collect();

    if kept.len() == content.lines().count() {
        return Ok(false);
    }

    let mut updated = kept.join("\n");
    if !updated.is_empty() {
        updated.push('\n');
    }
    utils::write_atomic(profile, updated.as_bytes()).await?;
    Ok(true)
}

async fn read_profile(profile: &Path) -> Result<String> {
    match async_fs::read_to_string(profile).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_profile_by_shell() {
        let home = Path::new("/home/me");
        assert_eq!(
            profile_for_shell(home, Some("/bin/zsh")),
            PathBuf::from("/home/me/.zshrc")
        );
        assert_eq!(
            profile_for_shell(home, Some("/usr/bin/bash")),
            PathBuf::from("/home/me/.bashrc")
        );
        assert_eq!(
            profile_for_shell(home, Some("/usr/bin/fish")),
            PathBuf::from("/home/me/.profile")
        );
        assert_eq!(
            profile_for_shell(home, None),
            PathBuf::from("/home/me/.profile")
        );
    }

    #[tokio::test]
    async fn alias_is_added_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".zshrc");
        async_fs::write(&profile, "export PATH=$PATH:/opt/bin").await.unwrap();

        add_alias(&profile, &alias_line(Path::new("/usr/local/bin/nin")))
            .await
            .unwrap();
        let content = async_fs::read_to_string(&profile).await.unwrap();
        assert_eq!(
            content,
            "export PATH=$PATH:/opt/bin\nalias nin='/usr/local/bin/nin'\n"
        );

        assert!(remove_alias(&profile).await.unwrap());
        let content = async_fs::read_to_string(&profile).await.unwrap();
        assert_eq!(content, "export PATH=$PATH:/opt/bin\n");

        assert!(!remove_alias(&profile).await.unwrap());
    }
}
