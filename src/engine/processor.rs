// src/engine/processor.rs

//! Pluggable batch processing.
//!
//! The runner talks to a `BatchProcessor` instead of printing directly. This
//! makes it easy to swap in a recording processor in tests while keeping the
//! production output in [`ConsoleProcessor`].

use std::io::Write;

use crate::errors::Result;
use crate::queue::ItemName;

/// Trait abstracting what "processing" a ready batch means.
pub trait BatchProcessor {
    /// Process every item of `batch`.
    ///
    /// `batch_number` starts at 1. Returning an error stops the run before
    /// the batch is acknowledged.
    fn process_batch(&mut self, batch_number: usize, batch: &[ItemName]) -> Result<()>;
}

/// Processor that reports each batch and item on a writer (stdout by default).
pub struct ConsoleProcessor<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleProcessor {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleProcessor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BatchProcessor for ConsoleProcessor<W> {
    fn process_batch(&mut self, _batch_number: usize, batch: &[ItemName]) -> Result<()> {
        writeln!(self.out, "Next Batch {batch:?}")?;
        for item in batch {
            writeln!(self.out, "Processing: {item}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_output_lists_every_item() {
        let mut processor = ConsoleProcessor::new(Vec::new());
        processor
            .process_batch(1, &["B".to_string(), "C".to_string()])
            .unwrap();

        let text = String::from_utf8(processor.into_inner()).unwrap();
        assert_eq!(
            text,
            "Next Batch [\"B\", \"C\"]\nProcessing: B\nProcessing: C\n\n"
        );
    }
}
