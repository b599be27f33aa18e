//! Breadth-first reference implementation.
//!
//! Labels components with a queue instead of union-find and counts
//! candidates by enumerating each component's members directly.

use std::collections::{HashSet, VecDeque};

use crate::EdgePolicy;

use super::types::GraphFixture;

/// Component label per zero-based node, labels assigned in discovery order.
pub(super) fn component_labels(fixture: &GraphFixture) -> Vec<usize> {
    let node_count = fixture.node_count;
    let mut neighbours = vec![Vec::new(); node_count];
    for &(left, right) in &fixture.friends {
        neighbours[left - 1].push(right - 1);
        neighbours[right - 1].push(left - 1);
    }

    let mut labels = vec![usize::MAX; node_count];
    let mut next_label = 0;
    for start in 0..node_count {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = next_label;
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &neighbours[node] {
                if labels[next] == usize::MAX {
                    labels[next] = next_label;
                    queue.push_back(next);
                }
            }
        }
        next_label += 1;
    }
    labels
}

/// Expected counts per node under `policy`.
pub(super) fn expected_counts(fixture: &GraphFixture, policy: EdgePolicy) -> Vec<i64> {
    let labels = component_labels(fixture);
    (0..fixture.node_count)
        .map(|node| {
            let members = labels.iter().filter(|&&label| label == labels[node]).count();
            let excluded: Vec<usize> = fixture
                .friends
                .iter()
                .chain(&fixture.blocks)
                .flat_map(|&(left, right)| {
                    let mut ends = Vec::new();
                    if left - 1 == node {
                        ends.push(right - 1);
                    }
                    if right - 1 == node {
                        ends.push(left - 1);
                    }
                    ends
                })
                .filter(|&other| labels[other] == labels[node])
                .collect();
            let charged = match policy {
                EdgePolicy::Verbatim => excluded.len(),
                EdgePolicy::Distinct => excluded
                    .into_iter()
                    .filter(|&other| other != node)
                    .collect::<HashSet<_>>()
                    .len(),
            };
            i64::try_from(members).expect("fits") - 1 - i64::try_from(charged).expect("fits")
        })
        .collect()
}
