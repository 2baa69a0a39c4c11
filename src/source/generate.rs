// src/source/generate.rs

//! Random demo plan generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::model::{ItemConfig, PlanFile, PlanSettings, RequiresField};
use crate::errors::{DepqueueError, Result};

/// Item names used by the generator, in registration order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Configuration for random plan generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Probability (0.0-1.0) that an item gets no requirements at all
    pub no_requirements_chance: f64,
    /// Probability (0.0-1.0) that an item requires any one earlier item
    pub requirement_chance: f64,
    /// Fixed seed for reproducible plans
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            no_requirements_chance: 0.05,
            requirement_chance: 0.2,
            seed: None,
        }
    }
}

/// Generates a plan with one item per letter of [`ALPHABET`].
///
/// The first item never has requirements. Every other item only requires
/// earlier letters, so the plan always registers cleanly and never cycles.
pub fn generate_plan(config: &GeneratorConfig) -> Result<PlanFile> {
    check_chance("no_requirements_chance", config.no_requirements_chance)?;
    check_chance("requirement_chance", config.requirement_chance)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let letters: Vec<String> = ALPHABET.chars().map(String::from).collect();
    let mut items = Vec::with_capacity(letters.len());

    for (i, name) in letters.iter().enumerate() {
        let mut item = ItemConfig::new(name.clone());

        if i > 0 && !rng.gen_bool(config.no_requirements_chance) {
            let requires: Vec<String> = letters[..i]
                .iter()
                .filter(|_| rng.gen_bool(config.requirement_chance))
                .cloned()
                .collect();

            if !requires.is_empty() {
                item.requires = Some(RequiresField::Many(requires));
            }
        }

        items.push(item);
    }

    let with_reqs = items.iter().filter(|i| i.requires.is_some()).count();
    debug!(items = items.len(), with_requirements = with_reqs, "generated random plan");

    Ok(PlanFile::new_unchecked(PlanSettings::default(), items))
}

fn check_chance(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DepqueueError::ConfigError(format!(
            "{field} must be between 0.0 and 1.0 (got {value})"
        )));
    }
    Ok(())
}
