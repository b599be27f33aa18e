//! Connected components of the friend relation.
//!
//! [`ComponentMaterializer`] walks the friend adjacency depth-first with an
//! explicit stack and unions every node with each of its neighbours. After a
//! pass, two nodes share a root exactly when a friend path joins them.

use tracing::debug;

use crate::{graph::SocialGraph, union_find::DisjointSet};

/// Counters reported by one materialization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Traversals started from a node no earlier traversal reached.
    pub traversals: usize,
    /// Unions that merged two distinct components.
    pub unions_applied: usize,
}

/// Merges friend-connected nodes into shared components.
///
/// # Examples
/// ```
/// use befriend_core::{ComponentMaterializer, DisjointSet, SocialGraph};
///
/// let graph = SocialGraph::from_edges(4, &[(1, 2), (2, 3)], &[])?;
/// let mut set = DisjointSet::new(graph.node_count());
/// let stats = ComponentMaterializer::new(&graph).materialize(&mut set);
/// assert_eq!(stats.traversals, 2);
/// assert_eq!(set.size_of(0), 3);
/// assert_eq!(set.size_of(3), 1);
/// # Ok::<(), befriend_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ComponentMaterializer<'g> {
    graph: &'g SocialGraph,
}

impl<'g> ComponentMaterializer<'g> {
    /// Prepares a pass over `graph`'s friend relation.
    #[must_use]
    pub const fn new(graph: &'g SocialGraph) -> Self {
        Self { graph }
    }

    /// Runs one full pass, merging into `set`.
    ///
    /// `set` must hold at least one entry per graph node. A second pass over
    /// the same set applies no unions.
    pub fn materialize(&self, set: &mut DisjointSet) -> MaterializeStats {
        let friends = self.graph.friends();
        let node_count = self.graph.node_count();
        let mut visited = vec![false; node_count];
        let mut stack = Vec::new();
        let mut stats = MaterializeStats::default();

        for start in 0..node_count {
            if visited[start] {
                continue;
            }
            stats.traversals += 1;
            visited[start] = true;
            stack.push(start);

            while let Some(node) = stack.pop() {
                for &next in friends.neighbours(node) {
                    if set.union(node, next) {
                        stats.unions_applied += 1;
                    }
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        debug!(
            traversals = stats.traversals,
            unions_applied = stats.unions_applied,
            "materialized friend components"
        );
        stats
    }
}

/// Frozen component membership read by the suggestion counter.
///
/// # Examples
/// ```
/// use befriend_core::{Components, SocialGraph};
///
/// let graph = SocialGraph::from_edges(3, &[(1, 2)], &[])?;
/// let components = Components::from_graph(&graph);
/// assert_eq!(components.count(), 2);
/// assert_eq!(components.root_of(0), components.root_of(1));
/// assert_eq!(components.size_of(2), 1);
/// # Ok::<(), befriend_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    roots: Vec<usize>,
    root_sizes: Vec<usize>,
    count: usize,
}

impl Components {
    /// Builds the disjoint set for `graph`, materializes it and freezes the
    /// result.
    #[must_use]
    pub fn from_graph(graph: &SocialGraph) -> Self {
        let mut set = DisjointSet::new(graph.node_count());
        ComponentMaterializer::new(graph).materialize(&mut set);
        Self::freeze(&mut set)
    }

    /// Resolves every node's root once so later lookups need no mutation.
    #[must_use]
    pub fn freeze(set: &mut DisjointSet) -> Self {
        let node_count = set.len();
        let mut roots = Vec::with_capacity(node_count);
        let mut root_sizes = vec![0; node_count];
        for node in 0..node_count {
            let root = set.find(node);
            roots.push(root);
            root_sizes[root] += 1;
        }
        Self {
            roots,
            root_sizes,
            count: set.component_count(),
        }
    }

    /// Root of the node at `index`.
    #[must_use]
    pub fn root_of(&self, index: usize) -> usize {
        self.roots[index]
    }

    /// Size of the component containing the node at `index`.
    #[must_use]
    pub fn size_of(&self, index: usize) -> usize {
        self.root_sizes[self.roots[index]]
    }

    /// Number of distinct components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.len()
    }

    /// Component sizes, one per distinct root, in ascending root order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.root_sizes.iter().copied().filter(|&size| size > 0)
    }
}
