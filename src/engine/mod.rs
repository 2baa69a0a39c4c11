// src/engine/mod.rs

//! Driving loop for the dependency queue.
//!
//! The queue only answers "what is ready now?". This module repeatedly asks
//! that question, hands each batch to a [`BatchProcessor`], acknowledges the
//! batch, and stops once nothing more is ready.
//!
//! - [`processor`] defines the processor seam and the console implementation.
//! - [`runner`] owns the loop and the resulting [`RunSummary`].

pub mod processor;
pub mod runner;

pub use processor::{BatchProcessor, ConsoleProcessor};
pub use runner::{run_until_blocked, RunSummary};
