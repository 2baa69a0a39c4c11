use std::str::FromStr;
use serde::Deserialize;

/// What to do when a plan entry names a requirement that is not registered
/// yet.
///
/// - `Abort`: stop populating the queue and report the error (default).
/// - `Skip`: leave that entry out, log it, and keep registering the rest.
///   Items that require a skipped entry are then skipped too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRequirementPolicy {
    Abort,
    Skip,
}

impl Default for UnknownRequirementPolicy {
    fn default() -> Self {
        UnknownRequirementPolicy::Abort
    }
}

impl FromStr for UnknownRequirementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(UnknownRequirementPolicy::Abort),
            "skip" => Ok(UnknownRequirementPolicy::Skip),
            other => Err(format!(
                "invalid on_unknown_requirement: {other} (expected \"abort\" or \"skip\")"
            )),
        }
    }
}

/// Output format for the plan summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummaryFormat {
    /// One block per item listing its requirements.
    #[default]
    Text,
    /// Graphviz DOT, one edge per requirement.
    Dot,
}
