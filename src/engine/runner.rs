// src/engine/runner.rs

use tracing::{debug, info, warn};

use crate::engine::processor::BatchProcessor;
use crate::errors::Result;
use crate::queue::{DependencyQueue, ItemName};

/// Result of driving a queue until nothing more is ready.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Every batch that was processed, in order.
    pub batches: Vec<Vec<ItemName>>,
    /// Number of items processed during this run.
    pub processed: usize,
    /// Registered items that never became ready.
    pub blocked: Vec<ItemName>,
}

impl RunSummary {
    /// Returns true if no registered item was left behind.
    pub fn is_complete(&self) -> bool {
        self.blocked.is_empty()
    }
}

/// Process ready batches until the queue reports an empty batch.
///
/// Each batch is acknowledged only after `processor` accepted it. A
/// processor error stops the loop and is returned; items of that batch stay
/// unprocessed.
pub fn run_until_blocked<P>(queue: &mut DependencyQueue, processor: &mut P) -> Result<RunSummary>
where
    P: BatchProcessor + ?Sized,
{
    let mut summary = RunSummary::default();

    loop {
        let batch = queue.next_ready_batch();
        if batch.is_empty() {
            break;
        }

        let batch_number = summary.batches.len() + 1;
        debug!(batch_number, ?batch, "processing batch");

        processor.process_batch(batch_number, &batch)?;
        queue.mark_batch_processed(batch.iter().cloned());

        summary.processed += batch.len();
        summary.batches.push(batch);
    }

    summary.blocked = queue.unprocessed();

    if summary.is_complete() {
        info!(
            batches = summary.batches.len(),
            processed = summary.processed,
            "all items processed"
        );
    } else {
        warn!(
            blocked = ?summary.blocked,
            "{} items could not be processed (requirements never satisfied)",
            summary.blocked.len()
        );
    }

    Ok(summary)
}
