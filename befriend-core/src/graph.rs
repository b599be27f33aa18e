//! Friend and block adjacency relations over a fixed node set.
//!
//! Both relations are undirected: an edge `(a, b)` appends `b` to `a`'s list
//! and `a` to `b`'s list, in input order. Parallel edges and self-loops are
//! stored as given.

use std::fmt;

use crate::{error::GraphError, node::NodeId};

/// Which of the two relations an edge belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// An established, mutual friendship.
    Friend,
    /// A mutual block.
    Block,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Friend => "friend",
            Self::Block => "block",
        })
    }
}

/// Per-node neighbour lists keyed by zero-based node index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Vec<usize>>,
    edges: usize,
}

impl Adjacency {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); node_count],
            edges: 0,
        }
    }

    fn connect(&mut self, left: usize, right: usize) {
        self.lists[left].push(right);
        self.lists[right].push(left);
        self.edges += 1;
    }

    /// Neighbours of the node at `index`, in insertion order.
    ///
    /// Unknown indices have no neighbours.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> &[usize] {
        self.lists.get(index).map_or(&[], Vec::as_slice)
    }

    /// Number of edges inserted, counting parallel edges and self-loops.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of nodes the relation spans.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }
}

/// Static social graph: a node set with friend and block relations.
///
/// # Examples
/// ```
/// use befriend_core::{NodeId, SocialGraph};
///
/// let graph = SocialGraph::from_edges(3, &[(1, 2)], &[(1, 3)])?;
/// let one = NodeId::new(1).expect("non-zero");
/// let friends: Vec<usize> = graph.friends_of(one).map(NodeId::get).collect();
/// assert_eq!(friends, vec![2]);
/// assert_eq!(graph.block_edge_count(), 1);
/// # Ok::<(), befriend_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialGraph {
    friends: Adjacency,
    blocks: Adjacency,
}

impl SocialGraph {
    /// Starts an empty graph over nodes `1..=node_count`.
    #[must_use]
    pub fn builder(node_count: usize) -> SocialGraphBuilder {
        SocialGraphBuilder {
            node_count,
            friends: Adjacency::with_nodes(node_count),
            blocks: Adjacency::with_nodes(node_count),
        }
    }

    /// Builds a graph from one-based edge lists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for the first endpoint outside
    /// `1..=node_count`.
    pub fn from_edges(
        node_count: usize,
        friends: &[(usize, usize)],
        blocks: &[(usize, usize)],
    ) -> Result<Self, GraphError> {
        let mut builder = Self::builder(node_count);
        for &(left, right) in friends {
            builder.add_friendship(left, right)?;
        }
        for &(left, right) in blocks {
            builder.add_block(left, right)?;
        }
        Ok(builder.build())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.friends.node_count()
    }

    /// Number of friend edges, including duplicates.
    #[must_use]
    pub const fn friend_edge_count(&self) -> usize {
        self.friends.edge_count()
    }

    /// Number of block edges, including duplicates.
    #[must_use]
    pub const fn block_edge_count(&self) -> usize {
        self.blocks.edge_count()
    }

    /// The friend relation.
    #[must_use]
    pub const fn friends(&self) -> &Adjacency {
        &self.friends
    }

    /// The block relation.
    #[must_use]
    pub const fn blocks(&self) -> &Adjacency {
        &self.blocks
    }

    /// Friend neighbours of `node` in input order.
    pub fn friends_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.friends
            .neighbours(node.index())
            .iter()
            .copied()
            .map(NodeId::from_index)
    }

    /// Block neighbours of `node` in input order.
    pub fn blocks_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.blocks
            .neighbours(node.index())
            .iter()
            .copied()
            .map(NodeId::from_index)
    }
}

/// Incrementally validates and inserts edges for a [`SocialGraph`].
#[derive(Clone, Debug)]
pub struct SocialGraphBuilder {
    node_count: usize,
    friends: Adjacency,
    blocks: Adjacency,
}

impl SocialGraphBuilder {
    /// Adds an undirected friend edge between one-based ids.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when either endpoint is outside
    /// `1..=node_count`; the graph is left unchanged.
    pub fn add_friendship(&mut self, left: usize, right: usize) -> Result<&mut Self, GraphError> {
        self.add_edge(Relation::Friend, left, right)
    }

    /// Adds an undirected block edge between one-based ids.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when either endpoint is outside
    /// `1..=node_count`; the graph is left unchanged.
    pub fn add_block(&mut self, left: usize, right: usize) -> Result<&mut Self, GraphError> {
        self.add_edge(Relation::Block, left, right)
    }

    /// Adds an undirected edge to `relation`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when either endpoint is outside
    /// `1..=node_count`; the graph is left unchanged.
    pub fn add_edge(
        &mut self,
        relation: Relation,
        left: usize,
        right: usize,
    ) -> Result<&mut Self, GraphError> {
        let left = self.checked_index(relation, left)?;
        let right = self.checked_index(relation, right)?;
        match relation {
            Relation::Friend => self.friends.connect(left, right),
            Relation::Block => self.blocks.connect(left, right),
        }
        Ok(self)
    }

    fn checked_index(&self, relation: Relation, node: usize) -> Result<usize, GraphError> {
        match NodeId::new(node) {
            Some(id) if node <= self.node_count => Ok(id.index()),
            _ => Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count,
                relation,
            }),
        }
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> SocialGraph {
        SocialGraph {
            friends: self.friends,
            blocks: self.blocks,
        }
    }
}
