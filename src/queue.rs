// src/queue.rs

//! The dependency queue: registered items, their requirements, and which
//! of them have been processed.
//!
//! Readiness is never stored. Every call to
//! [`DependencyQueue::next_ready_batch`] derives it from the processed set,
//! so the driving loop can ask for a batch as often as it likes.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::errors::QueueError;

/// Canonical item name type used throughout the crate.
pub type ItemName = String;

/// Requirements as handed to [`DependencyQueue::register`].
///
/// Callers may pass nothing, a single name, or a collection of names. A
/// collection may contain absent entries; those are skipped during
/// normalization rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Requirements {
    #[default]
    Absent,
    Single(ItemName),
    Many(Vec<Option<ItemName>>),
}

impl Requirements {
    /// Collapse any accepted shape into one ordered list of names.
    ///
    /// Absent entries are dropped and repeated names keep their first
    /// position. An empty result means "no requirements".
    pub fn normalize(self) -> Vec<ItemName> {
        let names: Vec<ItemName> = match self {
            Requirements::Absent => Vec::new(),
            Requirements::Single(name) => vec![name],
            Requirements::Many(entries) => entries.into_iter().flatten().collect(),
        };

        let mut seen = HashSet::new();
        names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}

impl From<()> for Requirements {
    fn from(_: ()) -> Self {
        Requirements::Absent
    }
}

impl From<&str> for Requirements {
    fn from(name: &str) -> Self {
        Requirements::Single(name.to_string())
    }
}

impl From<String> for Requirements {
    fn from(name: String) -> Self {
        Requirements::Single(name)
    }
}

impl From<Option<&str>> for Requirements {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Requirements::Absent, Requirements::from)
    }
}

impl From<Option<String>> for Requirements {
    fn from(name: Option<String>) -> Self {
        name.map_or(Requirements::Absent, Requirements::Single)
    }
}

impl From<Vec<String>> for Requirements {
    fn from(names: Vec<String>) -> Self {
        Requirements::Many(names.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for Requirements {
    fn from(names: Vec<&str>) -> Self {
        Requirements::from(names.as_slice())
    }
}

impl From<&[&str]> for Requirements {
    fn from(names: &[&str]) -> Self {
        Requirements::Many(names.iter().map(|n| Some(n.to_string())).collect())
    }
}

impl From<&[String]> for Requirements {
    fn from(names: &[String]) -> Self {
        Requirements::Many(names.iter().cloned().map(Some).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Requirements {
    fn from(names: [&str; N]) -> Self {
        Requirements::from(names.as_slice())
    }
}

impl From<Vec<Option<String>>> for Requirements {
    fn from(entries: Vec<Option<String>>) -> Self {
        Requirements::Many(entries)
    }
}

impl From<Vec<Option<&str>>> for Requirements {
    fn from(entries: Vec<Option<&str>>) -> Self {
        Requirements::Many(
            entries
                .into_iter()
                .map(|e| e.map(str::to_string))
                .collect(),
        )
    }
}

/// Read-only view of where an item sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Never successfully registered.
    Unregistered,
    /// Registered, but at least one requirement is not processed yet.
    Blocked,
    /// Registered, unprocessed, and every requirement is processed.
    Ready,
    Processed,
}

/// Registered items, their requirements, and the processed set.
///
/// Each queue owns its state; nothing is shared between instances.
#[derive(Debug, Clone, Default)]
pub struct DependencyQueue {
    /// Items in registration order.
    order: Vec<ItemName>,
    /// Normalized requirements per item. An empty list means none.
    requirements: HashMap<ItemName, Vec<ItemName>>,
    processed: HashSet<ItemName>,
    /// Processed items in acknowledgement order.
    processed_order: Vec<ItemName>,
}

impl DependencyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` with the given requirements.
    ///
    /// Registering a name twice is a no-op; the first registration wins.
    /// Every requirement must already be registered, otherwise
    /// [`QueueError::RequirementsNotInQueue`] is returned and nothing is
    /// added.
    pub fn register(
        &mut self,
        item: impl Into<ItemName>,
        requirements: impl Into<Requirements>,
    ) -> Result<(), QueueError> {
        let item = item.into();

        if self.requirements.contains_key(&item) {
            debug!(item = %item, "item already registered; keeping first registration");
            return Ok(());
        }

        let requirements = requirements.into().normalize();
        let missing: Vec<ItemName> = requirements
            .iter()
            .filter(|name| !self.requirements.contains_key(*name))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(QueueError::RequirementsNotInQueue { item, missing });
        }

        debug!(item = %item, ?requirements, "registered item");
        self.order.push(item.clone());
        self.requirements.insert(item, requirements);
        Ok(())
    }

    /// Stored requirements of `item`.
    ///
    /// `None` means the item is unknown; an empty slice means it has no
    /// requirements.
    pub fn requirements_of(&self, item: &str) -> Option<&[ItemName]> {
        self.requirements.get(item).map(Vec::as_slice)
    }

    /// Unprocessed items whose requirements are all processed, in
    /// registration order.
    ///
    /// An empty batch means nothing more can run: either everything is
    /// processed or the rest is blocked.
    pub fn next_ready_batch(&self) -> Vec<ItemName> {
        let batch: Vec<ItemName> = self
            .order
            .iter()
            .filter(|item| !self.processed.contains(*item) && self.requirements_met(item))
            .cloned()
            .collect();

        trace!(size = batch.len(), "computed next ready batch");
        batch
    }

    /// Acknowledge a single processed item. Repeats are ignored.
    pub fn mark_processed(&mut self, item: impl Into<ItemName>) {
        let item = item.into();
        if self.processed.insert(item.clone()) {
            debug!(item = %item, "item processed");
            self.processed_order.push(item);
        } else {
            debug!(item = %item, "item already processed; ignoring");
        }
    }

    /// Acknowledge every item of a batch.
    pub fn mark_batch_processed<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemName>,
    {
        for item in items {
            self.mark_processed(item);
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.requirements.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered items in registration order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn is_processed(&self, item: &str) -> bool {
        self.processed.contains(item)
    }

    /// Processed items in the order they were acknowledged.
    pub fn processed(&self) -> impl Iterator<Item = &str> {
        self.processed_order.iter().map(String::as_str)
    }

    pub fn processed_count(&self) -> usize {
        self.processed_order.len()
    }

    /// Registered items not processed yet, in registration order.
    pub fn unprocessed(&self) -> Vec<ItemName> {
        self.order
            .iter()
            .filter(|item| !self.processed.contains(*item))
            .cloned()
            .collect()
    }

    pub fn state_of(&self, item: &str) -> ItemState {
        if !self.contains(item) {
            ItemState::Unregistered
        } else if self.is_processed(item) {
            ItemState::Processed
        } else if self.requirements_met(item) {
            ItemState::Ready
        } else {
            ItemState::Blocked
        }
    }

    fn requirements_met(&self, item: &str) -> bool {
        self.requirements
            .get(item)
            .is_some_and(|reqs| reqs.iter().all(|r| self.processed.contains(r)))
    }
}
