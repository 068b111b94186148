//! Submission orchestration.
//!
//! [`InboxService`] turns a task and note into an email, checks connectivity,
//! hands the message to the [`Mailer`], and records the outcome: a success
//! bumps the submission counter, a failure lands in the [`OfflineQueue`].
//!
//! Every attempt moves through the same states:
//!
//! ```text
//! BUILDING -> (offline?) ------------------------------> QUEUED_OFFLINE
//!          -> ATTEMPTING_SEND -> success status -------> SUCCEEDED
//!                             -> rejection / transport -> FAILED_FATAL -> QUEUED_OFFLINE
//! ```
//!
//! A successful online submission replays the queue. Replays go through
//! [`InboxService::attempt`], which never drains, so a replayed item cannot
//! start another replay whatever its outcome.

use crate::{
    clients::{Connectivity, Mailer, SUCCESS_STATUSES},
    config::Settings,
    error::{Error, Result},
    management::{OfflineQueue, SubmissionCounter},
    types::{Attempt, DrainSummary, Envelope, FailureReason, Origin, Report, Submission},
    warning,
};

pub struct InboxService<M, C> {
    sender_email: String,
    inbox_address: String,
    mailer: M,
    connectivity: C,
    queue: OfflineQueue,
    counter: SubmissionCounter,
}

impl<M: Mailer, C: Connectivity> InboxService<M, C> {
    pub fn new(
        sender_email: impl Into<String>,
        inbox_address: impl Into<String>,
        mailer: M,
        connectivity: C,
        queue: OfflineQueue,
        counter: SubmissionCounter,
    ) -> Self {
        Self {
            sender_email: sender_email.into(),
            inbox_address: inbox_address.into(),
            mailer,
            connectivity,
            queue,
            counter,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        mailer: M,
        connectivity: C,
        queue: OfflineQueue,
        counter: SubmissionCounter,
    ) -> Self {
        Self::new(
            settings.sender_email.clone(),
            settings.inbox_address.clone(),
            mailer,
            connectivity,
            queue,
            counter,
        )
    }

    /// Submits a new item and, if it went through, replays the offline queue.
    pub async fn add(&self, task: &str, note: &str) -> Result<Report> {
        let outcome = self.attempt(task, note, Origin::Online).await.into_result()?;

        let drained = match outcome {
            Submission::Sent => Some(self.drain().await?),
            _ => None,
        };

        Ok(Report { outcome, drained })
    }

    /// Replays the offline queue without submitting anything new.
    pub async fn refresh(&self) -> Result<DrainSummary> {
        self.drain().await
    }

    pub fn queue(&self) -> &OfflineQueue {
        &self.queue
    }

    pub fn counter(&self) -> &SubmissionCounter {
        &self.counter
    }

    async fn drain(&self) -> Result<DrainSummary> {
        let this = self;
        self.queue
            .drain(move |item| async move {
                this.attempt(&item.task, &item.note, Origin::Offline).await
            })
            .await
    }

    /// One submission attempt. Queues on failure only for `Origin::Online`;
    /// queued items are owned by the drain that is replaying them, which also
    /// reports their failures.
    async fn attempt(&self, task: &str, note: &str, origin: Origin) -> Attempt {
        let envelope = self.build_envelope(task, note);

        match self.send(&envelope).await {
            Ok(()) => match self.counter.increment().await {
                Ok(_) => Attempt::Done(Submission::Sent),
                Err(e) => Attempt::SentWithError(e),
            },
            Err(err) if err.is_recoverable() => {
                let reason = match err {
                    Error::Connectivity => FailureReason::NoNetwork,
                    _ => FailureReason::Rejected,
                };

                match origin {
                    Origin::Online => {
                        match reason {
                            FailureReason::NoNetwork => warning!("No network connection."),
                            FailureReason::Rejected => {
                                warning!("Could not deliver \"{}\": {}", task, err)
                            }
                        }
                        match self.queue.add(&envelope.subject, &envelope.body).await {
                            Ok(()) => Attempt::Done(Submission::Queued(reason)),
                            Err(e) => Attempt::Failed(e),
                        }
                    }
                    Origin::Offline => Attempt::Done(Submission::Retained(reason)),
                }
            }
            Err(err) => Attempt::Failed(err),
        }
    }

    async fn send(&self, envelope: &Envelope) -> Result<()> {
        if !self.connectivity.is_online().await {
            return Err(Error::Connectivity);
        }

        let status = self.mailer.send(envelope).await?;
        if SUCCESS_STATUSES.contains(&status) {
            Ok(())
        } else {
            Err(Error::ProviderRejection { status })
        }
    }

    /// The provider refuses empty bodies, so an empty note becomes one space.
    pub fn build_envelope(&self, task: &str, note: &str) -> Envelope {
        let body = if note.is_empty() { " " } else { note };
        Envelope {
            from: self.sender_email.clone(),
            to: self.inbox_address.clone(),
            subject: task.to_string(),
            body: body.to_string(),
        }
    }
}
