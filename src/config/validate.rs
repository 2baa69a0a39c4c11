// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{DepqueueError, Result};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = DepqueueError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.config, raw.item))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_items(plan)?;
    validate_item_names(plan)?;
    warn_on_duplicates(plan);
    Ok(())
}

fn ensure_has_items(plan: &RawPlanFile) -> Result<()> {
    if plan.item.is_empty() {
        return Err(DepqueueError::ConfigError(
            "plan must contain at least one [[item]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_item_names(plan: &RawPlanFile) -> Result<()> {
    for (index, item) in plan.item.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(DepqueueError::ConfigError(format!(
                "item #{} has an empty `name`",
                index + 1
            )));
        }
    }
    Ok(())
}

// Duplicates are legal: the queue keeps the first registration.
fn warn_on_duplicates(plan: &RawPlanFile) {
    let mut seen = HashSet::new();
    for item in &plan.item {
        if !seen.insert(item.name.as_str()) {
            warn!(item = %item.name, "duplicate item in plan; later entry will be ignored");
        }
    }
}
