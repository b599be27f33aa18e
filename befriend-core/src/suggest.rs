//! Friend-suggestion counting.
//!
//! For node `i` in component `C`, the count starts at `|C| - 1` and drops by
//! one for every friend or block neighbour that also lies in `C`. Blocks that
//! point outside `C` never removed a candidate, so they are ignored.

use tracing::{info, instrument, warn};

use crate::{
    builder::EdgePolicy, components::Components, graph::SocialGraph, report::SuggestionReport,
};

/// Entry point for computing suggestion counts.
///
/// # Examples
/// ```
/// use befriend_core::{SocialGraph, SuggesterBuilder};
///
/// let graph = SocialGraph::from_edges(4, &[(1, 2), (2, 3)], &[])?;
/// let report = SuggesterBuilder::new().build().run(&graph);
/// assert_eq!(report.counts(), &[1, 0, 1, 0]);
/// # Ok::<(), befriend_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    edge_policy: EdgePolicy,
}

impl Suggester {
    pub(crate) const fn new(edge_policy: EdgePolicy) -> Self {
        Self { edge_policy }
    }

    /// Returns the duplicate-edge policy applied by [`Self::run`].
    #[must_use]
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Discovers friend components and counts candidates for every node.
    #[instrument(
        name = "suggester.run",
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            friend_edges = graph.friend_edge_count(),
            block_edges = graph.block_edge_count(),
            policy = %self.edge_policy,
        ),
    )]
    pub fn run(&self, graph: &SocialGraph) -> SuggestionReport {
        let components = Components::from_graph(graph);
        let counts = count_suggestions(graph, &components, self.edge_policy);
        let report = SuggestionReport::new(counts, &components, self.edge_policy);

        let negative = report.negative_count();
        if negative > 0 {
            warn!(
                negative_counts = negative,
                "duplicate or self-loop edges drove counts below zero"
            );
        }
        info!(
            components = report.component_count(),
            largest_component = report.largest_component(),
            negative_counts = negative,
            "computed suggestion counts"
        );
        report
    }
}

/// Counts candidates per node, in node order.
///
/// `components` must have been built from `graph`.
#[must_use]
pub fn count_suggestions(
    graph: &SocialGraph,
    components: &Components,
    policy: EdgePolicy,
) -> Vec<i64> {
    match policy {
        EdgePolicy::Verbatim => count_verbatim(graph, components),
        EdgePolicy::Distinct => count_distinct(graph, components),
    }
}

fn initial_candidates(components: &Components, node: usize) -> i64 {
    i64::try_from(components.size_of(node)).unwrap_or(i64::MAX) - 1
}

fn count_verbatim(graph: &SocialGraph, components: &Components) -> Vec<i64> {
    (0..graph.node_count())
        .map(|node| {
            let root = components.root_of(node);
            let excluded = graph
                .friends()
                .neighbours(node)
                .iter()
                .chain(graph.blocks().neighbours(node))
                .filter(|&&other| components.root_of(other) == root)
                .count();
            initial_candidates(components, node) - i64::try_from(excluded).unwrap_or(i64::MAX)
        })
        .collect()
}

fn count_distinct(graph: &SocialGraph, components: &Components) -> Vec<i64> {
    // stamp[other] == node + 1 marks `other` as already charged to `node`.
    let mut stamp = vec![0_usize; graph.node_count()];
    (0..graph.node_count())
        .map(|node| {
            let root = components.root_of(node);
            let mut candidates = initial_candidates(components, node);
            let neighbours = graph
                .friends()
                .neighbours(node)
                .iter()
                .chain(graph.blocks().neighbours(node));
            for &other in neighbours {
                if other == node || stamp[other] == node + 1 {
                    continue;
                }
                stamp[other] = node + 1;
                if components.root_of(other) == root {
                    candidates -= 1;
                }
            }
            candidates
        })
        .collect()
}
