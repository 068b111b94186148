use tabled::Table;

use crate::{
    error, info,
    management::{OfflineQueue, SubmissionCounter},
    types::QueueTableRow,
};

use super::StatePaths;

pub async fn status(paths: &StatePaths) {
    let count = match SubmissionCounter::new(&paths.data).count().await {
        Ok(count) => count,
        Err(e) => error!("Failed to read submission data: {}", e),
    };

    let items = match OfflineQueue::new(&paths.offline).items().await {
        Ok(items) => items,
        Err(e) => error!("Failed to read offline queue: {}", e),
    };

    info!("{} item(s) submitted with nin.", count);

    if items.is_empty() {
        info!("Offline queue is empty.");
        return;
    }

    let rows: Vec<QueueTableRow> = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| QueueTableRow {
            position: idx + 1,
            task: item.task,
            note: item.note,
        })
        .collect();

    info!("{} item(s) waiting in the offline queue:", rows.len());
    println!("{}", Table::new(rows));
}
