use std::path::PathBuf;

use crate::{error::Result, types::SubmissionData, utils};

pub struct SubmissionCounter {
    path: PathBuf,
}

impl SubmissionCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(self.load().await?.submission_count)
    }

    pub async fn increment(&self) -> Result<u64> {
        let mut data = self.load().await?;
        data.submission_count += 1;
        utils::write_json(&self.path, &data).await?;
        Ok(data.submission_count)
    }

    pub async fn remove(&self) -> Result<()> {
        utils::remove_if_exists(&self.path).await
    }

    async fn load(&self) -> Result<SubmissionData> {
        Ok(utils::read_json(&self.path).await?.unwrap_or_default())
    }
}
