// crates/test-utils/src/recording_processor.rs

use depqueue::engine::BatchProcessor;
use depqueue::errors::{DepqueueError, Result};
use depqueue::queue::ItemName;

/// A processor that:
/// - records every batch it was handed
/// - optionally fails on the batch containing a given item.
#[derive(Debug, Default)]
pub struct RecordingProcessor {
    pub batches: Vec<Vec<ItemName>>,
    fail_on: Option<ItemName>,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail (without recording) the first batch that contains `item`.
    pub fn failing_on(item: &str) -> Self {
        Self {
            batches: Vec::new(),
            fail_on: Some(item.to_string()),
        }
    }

    /// Every processed item, flattened in processing order.
    pub fn processed_items(&self) -> Vec<ItemName> {
        self.batches.iter().flatten().cloned().collect()
    }
}

impl BatchProcessor for RecordingProcessor {
    fn process_batch(&mut self, _batch_number: usize, batch: &[ItemName]) -> Result<()> {
        if let Some(item) = &self.fail_on {
            if batch.contains(item) {
                return Err(DepqueueError::Other(anyhow::anyhow!(
                    "processing {item} failed"
                )));
            }
        }
        self.batches.push(batch.to_vec());
        Ok(())
    }
}
