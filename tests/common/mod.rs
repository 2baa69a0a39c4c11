// tests/common/mod.rs

#![allow(dead_code)]

use depqueue::queue::DependencyQueue;

pub use depqueue_test_utils::init_tracing;

/// Build a queue from `(item, requirements)` pairs, registering in order.
///
/// Panics if any registration is rejected.
pub fn queue_from(entries: &[(&str, &[&str])]) -> DependencyQueue {
    let mut queue = DependencyQueue::new();
    for (item, reqs) in entries {
        queue
            .register(*item, *reqs)
            .unwrap_or_else(|e| panic!("registering {item}: {e}"));
    }
    queue
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
