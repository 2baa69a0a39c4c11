// src/config/model.rs

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::QueueError;
use crate::queue::{DependencyQueue, Requirements};
use crate::types::UnknownRequirementPolicy;

/// Plan as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// on_unknown_requirement = "abort"
///
/// [[item]]
/// name = "A"
///
/// [[item]]
/// name = "B"
/// requires = "A"
///
/// [[item]]
/// name = "C"
/// requires = ["A", "B"]
/// ```
///
/// `[[item]]` is an array of tables so that file order is registration
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: PlanSettings,

    /// All items from `[[item]]`, in file order.
    #[serde(default)]
    pub item: Vec<ItemConfig>,
}

/// A plan that passed validation. Build one with `PlanFile::try_from`.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: PlanSettings,
    pub items: Vec<ItemConfig>,
}

impl PlanFile {
    /// Internal constructor that bypasses validation.
    pub(crate) fn new_unchecked(config: PlanSettings, items: Vec<ItemConfig>) -> Self {
        Self { config, items }
    }

    /// Register every item into `queue`, in plan order.
    ///
    /// With [`UnknownRequirementPolicy::Abort`] the first rejected item is
    /// returned as an error and the remaining items are not registered.
    /// With [`UnknownRequirementPolicy::Skip`] rejected items are logged and
    /// returned so the caller can report them.
    pub fn register_into(
        &self,
        queue: &mut DependencyQueue,
        policy: UnknownRequirementPolicy,
    ) -> Result<Vec<QueueError>, QueueError> {
        let mut skipped = Vec::new();

        for item in &self.items {
            match queue.register(item.name.as_str(), item.requirements()) {
                Ok(()) => {}
                Err(err) => match policy {
                    UnknownRequirementPolicy::Abort => return Err(err),
                    UnknownRequirementPolicy::Skip => {
                        warn!(item = %item.name, error = %err, "skipping item");
                        skipped.push(err);
                    }
                },
            }
        }

        debug!(
            registered = queue.len(),
            skipped = skipped.len(),
            "plan registered into queue"
        );
        Ok(skipped)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanSettings {
    /// `"abort"` (default) or `"skip"`.
    #[serde(default)]
    pub on_unknown_requirement: UnknownRequirementPolicy,
}

/// One `[[item]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemConfig {
    pub name: String,

    /// Either a single name (`requires = "A"`) or a list
    /// (`requires = ["A", "B"]`). Omitted means no requirements.
    #[serde(default)]
    pub requires: Option<RequiresField>,
}

impl ItemConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: None,
        }
    }

    pub fn requirements(&self) -> Requirements {
        match &self.requires {
            None => Requirements::Absent,
            Some(RequiresField::One(name)) => Requirements::from(name.clone()),
            Some(RequiresField::Many(names)) => Requirements::from(names.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RequiresField {
    One(String),
    Many(Vec<String>),
}
