//! Fixture types for property-based tests.

use test_strategy::Arbitrary;

/// Topology family used to generate a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Few friend edges; many small components and isolated nodes.
    Sparse,
    /// Friend edge probability close to one.
    Dense,
    /// Several groups with no friend edges between them and blocks across.
    Clustered,
    /// One hub befriending everyone else.
    Star,
    /// Parallel edges, self-loops and friend/block overlaps.
    Multigraph,
}

/// Generated graph with one-based edge lists.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of nodes.
    pub node_count: usize,
    /// Friend edges as one-based pairs.
    pub friends: Vec<(usize, usize)>,
    /// Block edges as one-based pairs.
    pub blocks: Vec<(usize, usize)>,
    /// Shape the fixture was generated from.
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Whether the fixture has no self-loops, no parallel edges and no pair
    /// present in both relations.
    pub(super) fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.friends
            .iter()
            .chain(&self.blocks)
            .all(|&(left, right)| left != right && seen.insert((left.min(right), left.max(right))))
    }
}
