//! Node identifiers.

use std::{fmt, num::NonZeroUsize};

/// External identifier of a node, always in `1..=N`.
///
/// Containers are indexed by [`NodeId::index`], which is the identifier minus
/// one.
///
/// # Examples
/// ```
/// use befriend_core::NodeId;
///
/// let node = NodeId::new(3).expect("non-zero id");
/// assert_eq!(node.get(), 3);
/// assert_eq!(node.index(), 2);
/// assert!(NodeId::new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Wraps a raw one-based identifier, rejecting zero.
    #[must_use]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Builds the identifier stored at container position `index`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Returns the one-based identifier.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the zero-based container index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
