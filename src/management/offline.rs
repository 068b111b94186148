use std::{future::Future, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::Result,
    types::{Attempt, DrainSummary, FailureReason, OfflineItem, Submission},
    warning,
    utils,
};

/// FIFO store of submissions that could not be delivered.
pub struct OfflineQueue {
    path: PathBuf,
}

impl OfflineQueue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn add(&self, task: &str, note: &str) -> Result<()> {
        let mut items = self.items().await?;
        items.push(OfflineItem::new(task, note));
        self.persist(&items).await
    }

    pub async fn items(&self) -> Result<Vec<OfflineItem>> {
        Ok(utils::read_json(&self.path).await?.unwrap_or_default())
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.items().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.items().await?.is_empty())
    }

    pub async fn remove_all(&self) -> Result<()> {
        utils::remove_if_exists(&self.path).await
    }

    /// Replays every queued item through `submit`, oldest first, then rewrites
    /// the store with the items that were not acknowledged.
    ///
    /// A replay that reports no network stops the batch; that item and all
    /// later ones stay queued untouched. A rejected item stays queued and the
    /// batch continues. If `submit` fails hard, the store is rewritten with
    /// everything not yet acknowledged before the error is returned. An item
    /// the provider acknowledged is dropped even when its attempt errors.
    pub async fn drain<F, Fut>(&self, mut submit: F) -> Result<DrainSummary>
    where
        F: FnMut(OfflineItem) -> Fut,
        Fut: Future<Output = Attempt>,
    {
        let items = self.items().await?;
        if items.is_empty() {
            return Ok(DrainSummary::default());
        }

        let pb = ProgressBar::new(items.len() as u64);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let mut kept: Vec<OfflineItem> = Vec::new();
        let mut replayed = 0;
        let mut pending = items.into_iter();

        while let Some(item) = pending.next() {
            pb.set_message(item.task.clone());

            let outcome = match submit(item.clone()).await {
                Attempt::Done(outcome) => outcome,
                Attempt::SentWithError(e) => {
                    pb.finish_and_clear();
                    kept.extend(pending.by_ref());
                    self.persist(&kept).await?;
                    return Err(e);
                }
                Attempt::Failed(e) => {
                    pb.finish_and_clear();
                    kept.push(item);
                    kept.extend(pending.by_ref());
                    self.persist(&kept).await?;
                    return Err(e);
                }
            };
            pb.inc(1);

            match outcome {
                Submission::Sent => replayed += 1,
                Submission::Retained(FailureReason::NoNetwork)
                | Submission::Queued(FailureReason::NoNetwork) => {
                    pb.suspend(|| warning!("No network connection. Replay stopped."));
                    kept.push(item);
                    kept.extend(pending.by_ref());
                    break;
                }
                Submission::Retained(FailureReason::Rejected)
                | Submission::Queued(FailureReason::Rejected) => {
                    pb.suspend(|| {
                        warning!("Could not deliver \"{}\", keeping it queued.", item.task)
                    });
                    kept.push(item);
                }
            }
        }
        pb.finish_and_clear();

        self.persist(&kept).await?;
        Ok(DrainSummary {
            replayed,
            remaining: kept.len(),
        })
    }

    async fn persist(&self, items: &[OfflineItem]) -> Result<()> {
        if items.is_empty() {
            return self.remove_all().await;
        }
        utils::write_json(&self.path, items).await
    }
}
