use crate::{
    error, info,
    types::{FailureReason, Report, Submission},
    success, warning,
};

use super::{StatePaths, inbox_service, load_settings};

pub async fn submit(paths: &StatePaths, task: &str, note: &str) {
    let settings = load_settings();
    let service = inbox_service(paths, &settings);

    match service.add(task, note).await {
        Ok(report) => print_report(task, report),
        Err(e) => error!("Failed to submit \"{}\": {}", task, e),
    }
}

fn print_report(task: &str, report: Report) {
    match report.outcome {
        Submission::Sent => success!("Added \"{}\" to your Nirvana inbox.", task),
        Submission::Queued(FailureReason::NoNetwork) => info!(
            "You are offline. \"{}\" was saved and will be sent with your next submission or `nin --refresh`.",
            task
        ),
        Submission::Queued(FailureReason::Rejected) | Submission::Retained(_) => info!(
            "\"{}\" was saved offline and will be retried with your next submission or `nin --refresh`.",
            task
        ),
    }

    if let Some(summary) = report.drained {
        if summary.replayed > 0 {
            success!("Submitted {} item(s) from the offline queue.", summary.replayed);
        }
        if summary.remaining > 0 {
            warning!(
                "{} item(s) are still waiting in the offline queue.",
                summary.remaining
            );
        }
    }
}
