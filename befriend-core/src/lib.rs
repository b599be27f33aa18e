//! Befriend core library.
//!
//! Counts, for every node of a static social graph, how many nodes could be
//! suggested as a new friend: nodes in the same friend component that are
//! neither the node itself, a direct friend, nor blocked.

mod builder;
mod components;
mod error;
mod graph;
mod input;
mod node;
mod report;
mod suggest;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{EdgePolicy, SuggesterBuilder},
    components::{ComponentMaterializer, Components, MaterializeStats},
    error::{GraphError, GraphErrorCode, InputError, InputErrorCode},
    graph::{Adjacency, Relation, SocialGraph, SocialGraphBuilder},
    input::{MAX_NODE_COUNT, parse_expected, parse_graph, parse_graph_str},
    node::NodeId,
    report::{SuggestionReport, Verdict},
    suggest::{Suggester, count_suggestions},
    union_find::DisjointSet,
};
