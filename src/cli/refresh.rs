use crate::{error, info, success, warning};

use super::{StatePaths, inbox_service, load_settings};

pub async fn refresh(paths: &StatePaths) {
    let settings = load_settings();
    let service = inbox_service(paths, &settings);

    let queued = match service.queue().len().await {
        Ok(queued) => queued,
        Err(e) => error!("Failed to read offline queue: {}", e),
    };

    if queued == 0 {
        info!("Offline queue is empty.");
        return;
    }

    info!("Submitting {} queued item(s)...", queued);
    match service.refresh().await {
        Ok(summary) => {
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
        Err(e) => error!("Failed to submit offline queue: {}", e),
    }
}
