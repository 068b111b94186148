use std::{ffi::OsString, io::ErrorKind, path::Path};

use chrono::Utc;
use md5::{Digest, Md5};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Separator between task text and note text on the command line.
pub const NOTE_SEPARATOR: &str = "//";

/// Lowercase hex MD5 digest, the password format Nirvana's `auth.new` expects.
pub fn compute_md5_hash(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Splits command-line words into `(task, note)` at the first `//`.
///
/// Words on each side are joined with single spaces. Later `//` tokens are
/// kept as part of the note.
pub fn split_item(words: &[String]) -> (String, String) {
    match words.iter().position(|w| w == NOTE_SEPARATOR) {
        Some(idx) => (words[..idx].join(" "), words[idx + 1..].join(" ")),
        None => (words.join(" "), String::new()),
    }
}

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Reads a JSON state file. A missing file is `Ok(None)`; a malformed one is
/// reported as [`Error::Corrupt`] and left on disk.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| Error::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Io(e.into()))?;
    write_atomic(path, json.as_bytes()).await
}

/// Writes `contents` to a sibling temp file and renames it over `path`, so an
/// interrupted write never leaves a truncated state file behind.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    async_fs::write(&tmp_path, contents).await?;
    if let Err(e) = async_fs::rename(&tmp_path, path).await {
        let _ = async_fs::remove_file(&tmp_path).await;
        return Err(Error::Io(e));
    }
    Ok(())
}

pub async fn remove_if_exists(path: &Path) -> Result<()> {
    match async_fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}
