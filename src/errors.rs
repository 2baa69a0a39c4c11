// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::queue::ItemName;

/// The single failure the dependency queue itself can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `item` named requirements that are not registered yet.
    ///
    /// The queue is left untouched when this is returned.
    #[error(
        "cannot add '{item}': requirements not in queue: {}",
        .missing.join(", ")
    )]
    RequirementsNotInQueue {
        item: ItemName,
        missing: Vec<ItemName>,
    },
}

#[derive(Error, Debug)]
pub enum DepqueueError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DepqueueError>;
