// tests/queue_scenarios.rs

mod common;

use common::{init_tracing, names, queue_from};
use depqueue::errors::QueueError;
use depqueue::queue::DependencyQueue;

#[test]
fn chain_releases_one_item_per_batch() {
    init_tracing();
    let mut queue = DependencyQueue::new();
    queue.register("A", ()).unwrap();
    queue.register("B", ["A"]).unwrap();

    assert_eq!(queue.next_ready_batch(), names(&["A"]));
    queue.mark_batch_processed(["A"]);

    assert_eq!(queue.next_ready_batch(), names(&["B"]));
    queue.mark_batch_processed(["B"]);

    assert!(queue.next_ready_batch().is_empty());
}

#[test]
fn unknown_requirement_is_rejected_without_side_effects() {
    init_tracing();
    let mut queue = DependencyQueue::new();
    queue.register("A", ()).unwrap();

    let err = queue.register("C", ["B"]).unwrap_err();
    assert_eq!(
        err,
        QueueError::RequirementsNotInQueue {
            item: "C".to_string(),
            missing: names(&["B"]),
        }
    );

    assert!(!queue.contains("C"));
    assert_eq!(queue.requirements_of("C"), None);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.next_ready_batch(), names(&["A"]));
}

#[test]
fn siblings_become_ready_together_in_registration_order() {
    init_tracing();
    let mut queue = queue_from(&[("A", &[]), ("B", &["A"]), ("C", &["A"])]);

    assert_eq!(queue.next_ready_batch(), names(&["A"]));
    queue.mark_processed("A");
    assert_eq!(queue.next_ready_batch(), names(&["B", "C"]));
}

#[test]
fn bare_requirement_equals_one_element_list() {
    init_tracing();
    let mut bare = DependencyQueue::new();
    bare.register("A", ()).unwrap();
    bare.register("B", "A").unwrap();

    let mut listed = DependencyQueue::new();
    listed.register("A", ()).unwrap();
    listed.register("B", vec!["A"]).unwrap();

    assert_eq!(bare.requirements_of("B"), listed.requirements_of("B"));
    assert_eq!(bare.next_ready_batch(), listed.next_ready_batch());

    bare.mark_processed("A");
    listed.mark_processed("A");
    assert_eq!(bare.next_ready_batch(), listed.next_ready_batch());
}

#[test]
fn requirements_of_distinguishes_unknown_from_none() {
    let queue = queue_from(&[("A", &[]), ("B", &["A"])]);

    assert_eq!(queue.requirements_of("A"), Some(&[][..]));
    assert_eq!(queue.requirements_of("B"), Some(&names(&["A"])[..]));
    assert_eq!(queue.requirements_of("Z"), None);
}

#[test]
fn re_registration_keeps_first_requirements() {
    let mut queue = queue_from(&[("A", &[]), ("B", &[]), ("C", &["A"])]);

    queue.register("C", ["B"]).unwrap();
    queue.register("C", "missing").unwrap();

    assert_eq!(queue.requirements_of("C"), Some(&names(&["A"])[..]));
    assert_eq!(queue.items().collect::<Vec<_>>(), vec!["A", "B", "C"]);
}

#[test]
fn next_ready_batch_is_repeatable() {
    let queue = queue_from(&[("A", &[]), ("B", &[]), ("C", &["A", "B"])]);

    let first = queue.next_ready_batch();
    let second = queue.next_ready_batch();
    assert_eq!(first, second);
    assert_eq!(first, names(&["A", "B"]));
}

#[test]
fn processed_items_never_reappear() {
    let mut queue = queue_from(&[("A", &[]), ("B", &["A"]), ("C", &["B"]), ("D", &[])]);

    let mut seen = Vec::new();
    loop {
        let batch = queue.next_ready_batch();
        if batch.is_empty() {
            break;
        }
        for item in &batch {
            assert!(!seen.contains(item), "{item} was offered twice");
        }
        seen.extend(batch.iter().cloned());
        queue.mark_batch_processed(batch);
    }

    assert_eq!(seen, names(&["A", "D", "B", "C"]));
}

#[test]
fn item_waits_for_every_requirement() {
    let mut queue = queue_from(&[("A", &[]), ("B", &[]), ("C", &["A", "B"])]);

    queue.mark_processed("A");
    assert_eq!(queue.next_ready_batch(), names(&["B"]));

    queue.mark_processed("B");
    assert_eq!(queue.next_ready_batch(), names(&["C"]));
}

#[test]
fn marking_unreturned_or_unknown_items_is_tolerated() {
    let mut queue = queue_from(&[("A", &[]), ("B", &["A"])]);

    queue.mark_processed("ghost");
    queue.mark_processed("B");
    queue.mark_processed("B");

    assert!(queue.is_processed("ghost"));
    assert_eq!(queue.next_ready_batch(), names(&["A"]));
    assert_eq!(queue.processed_count(), 2);
}

#[test]
fn rejection_message_names_item_and_missing_requirements() {
    let mut queue = queue_from(&[("A", &[])]);
    let err = queue.register("D", ["B", "A", "C"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot add 'D': requirements not in queue: B, C"
    );
}
