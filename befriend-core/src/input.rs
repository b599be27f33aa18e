//! Token-stream reader for the `N M K` graph format.
//!
//! The stream holds whitespace-separated integers: the node count `N`, the
//! friend edge count `M` and the block edge count `K`, followed by `M` friend
//! pairs and `K` block pairs. Anything after the last pair is rejected.

use std::io::Read;
use std::str::{FromStr, SplitAsciiWhitespace};

use tracing::{debug, instrument};

use crate::{
    error::InputError,
    graph::{Relation, SocialGraph},
};

/// Largest node count [`parse_graph_str`] accepts.
///
/// Node-indexed storage is allocated from the header before any edge is read,
/// so the declared count is bounded to keep a short header from requesting
/// an unbounded allocation.
pub const MAX_NODE_COUNT: usize = 10_000_000;

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            position: 0,
        }
    }

    fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::MissingToken { expected })?;
        self.position += 1;
        token.parse().map_err(|_| InputError::InvalidInteger {
            token: token.to_owned(),
            position: self.position,
            expected,
        })
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.inner.next() {
            Some(_) => Err(InputError::TrailingInput {
                position: self.position + 1,
            }),
            None => Ok(()),
        }
    }
}

/// Reads a whole graph description from `reader`.
///
/// # Errors
/// Returns [`InputError::Io`] when reading fails, otherwise the errors of
/// [`parse_graph_str`].
pub fn parse_graph<R: Read>(mut reader: R) -> Result<SocialGraph, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_graph_str(&text)
}

/// Parses a graph description held in memory.
///
/// # Errors
/// Returns [`InputError::MissingToken`] when the stream ends early,
/// [`InputError::InvalidInteger`] for a token that is not a non-negative
/// integer, [`InputError::NodeCountTooLarge`] when `N` exceeds
/// [`MAX_NODE_COUNT`], [`InputError::Edge`] for an endpoint outside `1..=N`, and
/// [`InputError::TrailingInput`] when tokens follow the last declared edge.
///
/// # Examples
/// ```
/// use befriend_core::parse_graph_str;
///
/// let graph = parse_graph_str("4 2 0\n1 2\n2 3\n")?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.friend_edge_count(), 2);
/// # Ok::<(), befriend_core::InputError>(())
/// ```
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn parse_graph_str(text: &str) -> Result<SocialGraph, InputError> {
    let mut tokens = Tokens::new(text);
    let node_count: usize = tokens.next_value("node count")?;
    if node_count > MAX_NODE_COUNT {
        return Err(InputError::NodeCountTooLarge {
            node_count,
            limit: MAX_NODE_COUNT,
        });
    }
    let friend_edges: usize = tokens.next_value("friend edge count")?;
    let block_edges: usize = tokens.next_value("block edge count")?;
    debug!(node_count, friend_edges, block_edges, "read graph header");

    let mut builder = SocialGraph::builder(node_count);
    for (relation, declared) in [
        (Relation::Friend, friend_edges),
        (Relation::Block, block_edges),
    ] {
        for edge in 1..=declared {
            let left = tokens.next_value(endpoint_label(relation))?;
            let right = tokens.next_value(endpoint_label(relation))?;
            builder
                .add_edge(relation, left, right)
                .map_err(|source| InputError::Edge { edge, source })?;
        }
    }
    tokens.finish()?;
    Ok(builder.build())
}

const fn endpoint_label(relation: Relation) -> &'static str {
    match relation {
        Relation::Friend => "friend edge endpoint",
        Relation::Block => "block edge endpoint",
    }
}

/// Parses an expected answer: whitespace-separated signed counts.
///
/// # Errors
/// Returns [`InputError::InvalidInteger`] for the first token that is not an
/// integer.
///
/// # Examples
/// ```
/// use befriend_core::parse_expected;
///
/// assert_eq!(parse_expected("1 0 -1\n")?, vec![1, 0, -1]);
/// # Ok::<(), befriend_core::InputError>(())
/// ```
pub fn parse_expected(text: &str) -> Result<Vec<i64>, InputError> {
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| InputError::InvalidInteger {
                token: token.to_owned(),
                position: index + 1,
                expected: "suggestion count",
            })
        })
        .collect()
}
