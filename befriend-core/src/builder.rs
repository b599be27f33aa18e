//! Builder utilities for configuring [`Suggester`] instances.

use std::fmt;

use crate::suggest::Suggester;

/// How repeated adjacency entries are charged against a node's candidates.
///
/// Parallel edges, self-loops and pairs present in both relations show up as
/// repeated neighbour entries.
///
/// # Examples
/// ```
/// use befriend_core::EdgePolicy;
///
/// assert_eq!(EdgePolicy::default(), EdgePolicy::Verbatim);
/// assert_eq!(EdgePolicy::Distinct.to_string(), "distinct");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Every same-component adjacency entry removes one candidate, repeats
    /// included. Duplicate edges can drive a count below zero.
    #[default]
    Verbatim,
    /// Each distinct neighbour other than the node itself removes at most one
    /// candidate, so counts stay within `0..=N-1`.
    Distinct,
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verbatim => "verbatim",
            Self::Distinct => "distinct",
        })
    }
}

/// Configures and constructs [`Suggester`] instances.
///
/// # Examples
/// ```
/// use befriend_core::{EdgePolicy, SuggesterBuilder};
///
/// let suggester = SuggesterBuilder::new()
///     .with_edge_policy(EdgePolicy::Distinct)
///     .build();
/// assert_eq!(suggester.edge_policy(), EdgePolicy::Distinct);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuggesterBuilder {
    edge_policy: EdgePolicy,
}

impl SuggesterBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the duplicate-edge policy.
    #[must_use]
    pub const fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Returns the configured duplicate-edge policy.
    #[must_use]
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Constructs the configured [`Suggester`].
    #[must_use]
    pub const fn build(self) -> Suggester {
        Suggester::new(self.edge_policy)
    }
}
