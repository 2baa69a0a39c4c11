// src/cli.rs

//! CLI argument parsing using `clap`.

use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::source::GeneratorConfig;
use crate::types::{SummaryFormat, UnknownRequirementPolicy};

/// Command-line arguments for `depqueue`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depqueue",
    version,
    about = "Process items in batches as their requirements complete.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a plan file (TOML).
    ///
    /// If omitted, a random demo plan over the letters A-Z, a-z is generated.
    #[arg(long, value_name = "PATH")]
    pub plan: Option<String>,

    /// Seed for the random demo plan.
    #[arg(long, value_name = "N", conflicts_with = "plan")]
    pub seed: Option<u64>,

    /// Chance (0.0-1.0) that a generated item has no requirements.
    #[arg(long, value_name = "P", default_value_t = 0.05, conflicts_with = "plan")]
    pub no_requirements_chance: f64,

    /// Chance (0.0-1.0) that a generated item requires any one earlier item.
    #[arg(long, value_name = "P", default_value_t = 0.2, conflicts_with = "plan")]
    pub requirement_chance: f64,

    /// What to do with items whose requirements are not registered
    /// (abort, skip).
    ///
    /// Overrides `[config].on_unknown_requirement` in the plan file.
    #[arg(
        long,
        value_name = "POLICY",
        value_parser = UnknownRequirementPolicy::from_str,
        conflicts_with = "skip_invalid"
    )]
    pub on_unknown_requirement: Option<UnknownRequirementPolicy>,

    /// Shorthand for `--on-unknown-requirement skip`.
    #[arg(long)]
    pub skip_invalid: bool,

    /// Print the item summary before processing.
    #[arg(long)]
    pub summary: bool,

    /// Summary format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// Load and register items, print the summary, but process nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPQUEUE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            no_requirements_chance: self.no_requirements_chance,
            requirement_chance: self.requirement_chance,
            seed: self.seed,
        }
    }

    /// Policy forced from the command line, if any.
    pub fn policy_override(&self) -> Option<UnknownRequirementPolicy> {
        if self.skip_invalid {
            Some(UnknownRequirementPolicy::Skip)
        } else {
            self.on_unknown_requirement
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_generate_random_plan() {
        let args = CliArgs::try_parse_from(["depqueue"]).unwrap();
        assert!(args.plan.is_none());
        assert_eq!(args.format, SummaryFormat::Text);

        let generator = args.generator_config();
        assert_eq!(generator.no_requirements_chance, 0.05);
        assert_eq!(generator.requirement_chance, 0.2);
        assert_eq!(generator.seed, None);
    }

    #[test]
    fn test_seed_conflicts_with_plan() {
        let result = CliArgs::try_parse_from(["depqueue", "--plan", "p.toml", "--seed", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_flag_overrides_plan() {
        let args = CliArgs::try_parse_from(["depqueue"]).unwrap();
        assert_eq!(args.policy_override(), None);

        let args =
            CliArgs::try_parse_from(["depqueue", "--on-unknown-requirement", " Skip "]).unwrap();
        assert_eq!(args.policy_override(), Some(UnknownRequirementPolicy::Skip));

        let args = CliArgs::try_parse_from(["depqueue", "--skip-invalid"]).unwrap();
        assert_eq!(args.policy_override(), Some(UnknownRequirementPolicy::Skip));
    }

    #[test]
    fn test_unknown_policy_value_is_rejected() {
        let result = CliArgs::try_parse_from(["depqueue", "--on-unknown-requirement", "retry"]);
        assert!(result.is_err());

        let result = CliArgs::try_parse_from([
            "depqueue",
            "--skip-invalid",
            "--on-unknown-requirement",
            "abort",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dot_format_flag() {
        let args = CliArgs::try_parse_from(["depqueue", "--summary", "--format", "dot"]).unwrap();
        assert!(args.summary);
        assert_eq!(args.format, SummaryFormat::Dot);
    }
}
