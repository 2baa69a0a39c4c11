// crates/test-utils/src/builders.rs

#![allow(dead_code)]

use depqueue::config::{ItemConfig, PlanFile, PlanSettings, RawPlanFile, RequiresField};
use depqueue::types::UnknownRequirementPolicy;

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                config: PlanSettings::default(),
                item: Vec::new(),
            },
        }
    }

    pub fn with_item(mut self, item: ItemConfig) -> Self {
        self.plan.item.push(item);
        self
    }

    pub fn on_unknown_requirement(mut self, policy: UnknownRequirementPolicy) -> Self {
        self.plan.config.on_unknown_requirement = policy;
        self
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ItemConfig`.
pub struct ItemConfigBuilder {
    item: ItemConfig,
}

impl ItemConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            item: ItemConfig::new(name),
        }
    }

    /// Add one requirement, keeping the list form.
    pub fn requires(mut self, dep: &str) -> Self {
        match self.item.requires.take() {
            Some(RequiresField::Many(mut names)) => {
                names.push(dep.to_string());
                self.item.requires = Some(RequiresField::Many(names));
            }
            Some(RequiresField::One(name)) => {
                self.item.requires = Some(RequiresField::Many(vec![name, dep.to_string()]));
            }
            None => {
                self.item.requires = Some(RequiresField::Many(vec![dep.to_string()]));
            }
        }
        self
    }

    /// Set a single bare requirement (`requires = "A"`).
    pub fn requires_one(mut self, dep: &str) -> Self {
        self.item.requires = Some(RequiresField::One(dep.to_string()));
        self
    }

    pub fn build(self) -> ItemConfig {
        self.item
    }
}
