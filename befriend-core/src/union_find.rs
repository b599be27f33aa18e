//! Union-find (disjoint set union) over zero-based node indices.
//!
//! Components are merged while the friend graph is traversed. Each root
//! carries the number of nodes whose parent chain ends at it, which the
//! suggestion counter reads as the component size.

/// Disjoint-set forest with path compression and union by size.
///
/// # Examples
/// ```
/// use befriend_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1));
/// assert!(set.union(1, 2));
/// assert!(!set.union(0, 2));
/// assert_eq!(set.size_of(2), 3);
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton components, one per node index `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let mut set = Self {
            parent: Vec::with_capacity(n),
            size: Vec::with_capacity(n),
            components: 0,
        };
        for node in 0..n {
            set.make_set(node);
        }
        set
    }

    /// Registers `node` as its own root with size one.
    ///
    /// Indices past the current length grow the forest with singletons. Only
    /// call this for a node before it takes part in any union.
    pub fn make_set(&mut self, node: usize) {
        while self.parent.len() <= node {
            let next = self.parent.len();
            self.parent.push(next);
            self.size.push(1);
            self.components += 1;
        }
        self.parent[node] = node;
        self.size[node] = 1;
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no node has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `node`'s component, re-pointing every node on the
    /// path directly at it.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components of `left` and `right`.
    ///
    /// The larger root absorbs the smaller; on a tie `left`'s root absorbs.
    /// Returns `false` when both were already in one component.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut keep = self.find(left);
        let mut absorb = self.find(right);
        if keep == absorb {
            return false;
        }
        if self.size[keep] < self.size[absorb] {
            std::mem::swap(&mut keep, &mut absorb);
        }
        self.parent[absorb] = keep;
        self.size[keep] += self.size[absorb];
        self.components -= 1;
        true
    }

    /// Whether `left` and `right` share a component.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Size of the component containing `node`.
    pub fn size_of(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Iterates over the current roots in ascending index order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(node, &parent)| (node == parent).then_some(node))
    }
}
