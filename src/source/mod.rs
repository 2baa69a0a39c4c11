// src/source/mod.rs

//! Item sources other than plan files.
//!
//! - [`generate`] builds a random demo plan over the letters `A-Z`, `a-z`.

pub mod generate;

pub use generate::{generate_plan, GeneratorConfig, ALPHABET};
