// src/report.rs

//! Human-readable views of a queue's registrations.
//!
//! Nothing here affects scheduling; the output format is free to change.

use std::fmt::Write;

use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;

use crate::queue::DependencyQueue;
use crate::types::SummaryFormat;

/// Render the queue's registrations in the requested format.
pub fn render(queue: &DependencyQueue, format: SummaryFormat) -> String {
    match format {
        SummaryFormat::Text => render_text(queue),
        SummaryFormat::Dot => render_dot(queue),
    }
}

/// One block per item, in registration order:
///
/// ```text
/// Item: B
/// Requires
/// A
/// --------------
/// ```
pub fn render_text(queue: &DependencyQueue) -> String {
    let mut out = String::new();

    for item in queue.items() {
        let _ = writeln!(out, "Item: {item}");
        let _ = writeln!(out, "Requires");
        match queue.requirements_of(item) {
            Some(reqs) if !reqs.is_empty() => {
                for req in reqs {
                    let _ = writeln!(out, "{req}");
                }
            }
            _ => {
                let _ = writeln!(out, "No Requirements");
            }
        }
        let _ = writeln!(out, "--------------");
    }

    out
}

/// Graphviz DOT with an edge from each requirement to the item needing it.
pub fn render_dot(queue: &DependencyQueue) -> String {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for item in queue.items() {
        graph.add_node(item);
    }

    for item in queue.items() {
        for req in queue.requirements_of(item).unwrap_or(&[]) {
            graph.add_edge(req.as_str(), item, ());
        }
    }

    format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_queue() -> DependencyQueue {
        let mut queue = DependencyQueue::new();
        queue.register("A", ()).unwrap();
        queue.register("B", "A").unwrap();
        queue
    }

    #[test]
    fn test_text_summary_lists_requirements_in_order() {
        let text = render_text(&sample_queue());
        assert_eq!(
            text,
            "Item: A\nRequires\nNo Requirements\n--------------\n\
             Item: B\nRequires\nA\n--------------\n"
        );
    }

    #[test]
    fn test_dot_contains_requirement_edge() {
        let dot = render(&sample_queue(), SummaryFormat::Dot);
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("0 -> 1"));
        assert!(dot.contains('A'));
        assert!(dot.contains('B'));
    }
}
