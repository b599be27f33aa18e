//! Suggestion counts and answer comparison.

use std::fmt;

use crate::{builder::EdgePolicy, components::Components, node::NodeId};

/// Output of a [`crate::Suggester::run`] invocation.
///
/// # Examples
/// ```
/// use befriend_core::{NodeId, SocialGraph, SuggesterBuilder};
///
/// let graph = SocialGraph::from_edges(3, &[(1, 2)], &[(1, 3)])?;
/// let report = SuggesterBuilder::new().build().run(&graph);
/// assert_eq!(report.len(), 3);
/// assert_eq!(report.component_count(), 2);
/// assert_eq!(report.get(NodeId::new(3).expect("non-zero")), Some(0));
/// # Ok::<(), befriend_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionReport {
    counts: Vec<i64>,
    component_count: usize,
    largest_component: usize,
    edge_policy: EdgePolicy,
}

impl SuggestionReport {
    pub(crate) fn new(counts: Vec<i64>, components: &Components, edge_policy: EdgePolicy) -> Self {
        Self {
            counts,
            component_count: components.count(),
            largest_component: components.sizes().max().unwrap_or(0),
            edge_policy,
        }
    }

    /// Candidate counts for nodes `1..=N`, in node order.
    #[must_use]
    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    /// Candidate count for `node`, or `None` past the last node.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<i64> {
        self.counts.get(node.index()).copied()
    }

    /// Number of nodes reported.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of friend components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }

    /// Size of the largest friend component, zero for an empty graph.
    #[must_use]
    pub const fn largest_component(&self) -> usize {
        self.largest_component
    }

    /// Number of nodes whose count fell below zero.
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.counts.iter().filter(|&&count| count < 0).count()
    }

    /// Policy the counts were computed under.
    #[must_use]
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Compares the counts against an expected answer, token by token.
    ///
    /// # Examples
    /// ```
    /// use befriend_core::{SocialGraph, SuggesterBuilder, Verdict};
    ///
    /// let graph = SocialGraph::from_edges(2, &[], &[])?;
    /// let report = SuggesterBuilder::new().build().run(&graph);
    /// assert_eq!(report.compare(&[0, 0]), Verdict::Accepted);
    /// assert!(!report.compare(&[0, 1]).is_accepted());
    /// # Ok::<(), befriend_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn compare(&self, expected: &[i64]) -> Verdict {
        if expected.len() != self.counts.len() {
            return Verdict::LengthMismatch {
                expected: expected.len(),
                actual: self.counts.len(),
            };
        }
        self.counts
            .iter()
            .zip(expected)
            .enumerate()
            .find(|(_, (actual, wanted))| actual != wanted)
            .map_or(Verdict::Accepted, |(index, (&actual, &wanted))| {
                Verdict::WrongAnswer {
                    node: NodeId::from_index(index),
                    expected: wanted,
                    actual,
                }
            })
    }
}

/// Outcome of comparing a report against an expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every count matched.
    Accepted,
    /// The answer lists a different number of nodes.
    LengthMismatch {
        /// Number of values in the expected answer.
        expected: usize,
        /// Number of values produced.
        actual: usize,
    },
    /// The first node whose count differs.
    WrongAnswer {
        /// Node whose count differs.
        node: NodeId,
        /// Value from the expected answer.
        expected: i64,
        /// Value produced.
        actual: i64,
    },
}

impl Verdict {
    /// Whether the comparison succeeded.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "wrong answer: expected {expected} values but produced {actual}"
            ),
            Self::WrongAnswer {
                node,
                expected,
                actual,
            } => write!(
                f,
                "wrong answer: node {node} expected {expected} but produced {actual}"
            ),
        }
    }
}
