// src/config/mod.rs

//! Plan files: the TOML source of items and requirements.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty item names (`validate.rs`).
//!
//! Requirement references are deliberately not checked here. Unknown or
//! forward references are rejected by the queue itself when the plan is
//! registered, in file order.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ItemConfig, PlanFile, PlanSettings, RawPlanFile, RequiresField};
