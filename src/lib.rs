// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod queue;
pub mod report;
pub mod source;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, PlanFile};
use crate::engine::{run_until_blocked, ConsoleProcessor};
use crate::queue::DependencyQueue;
use crate::source::generate_plan;

pub use crate::errors::{DepqueueError, QueueError};
pub use crate::queue::{ItemName, ItemState, Requirements};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the item source (plan file or random generator)
/// - queue population
/// - optional summary output
/// - the batch loop with console output
pub fn run(args: CliArgs) -> Result<()> {
    let plan = load_plan(&args)?;

    let policy = args
        .policy_override()
        .unwrap_or(plan.config.on_unknown_requirement);

    let mut queue = DependencyQueue::new();
    let skipped = plan.register_into(&mut queue, policy)?;
    if !skipped.is_empty() {
        info!(skipped = skipped.len(), "some items were left out of the queue");
    }

    if args.summary || args.dry_run {
        print!("{}", report::render(&queue, args.format));
    }

    if args.dry_run {
        debug!("dry-run complete (nothing processed)");
        return Ok(());
    }

    let mut processor = ConsoleProcessor::stdout();
    let summary = run_until_blocked(&mut queue, &mut processor)?;
    debug!(batches = summary.batches.len(), "run finished");

    Ok(())
}

fn load_plan(args: &CliArgs) -> Result<PlanFile> {
    match &args.plan {
        Some(path) => {
            load_and_validate(path).with_context(|| format!("loading plan from {path:?}"))
        }
        None => {
            let generator = args.generator_config();
            info!(seed = ?generator.seed, "no plan given; generating a random one");
            Ok(generate_plan(&generator)?)
        }
    }
}
