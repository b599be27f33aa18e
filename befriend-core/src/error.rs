//! Error types for the befriend core library.
//!
//! Graph construction and token-stream parsing fail fast on malformed input;
//! every variant maps to a stable machine-readable code.

use std::{fmt, io};

use thiserror::Error;

use crate::graph::Relation;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while adding edges to a [`crate::SocialGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint was outside `[1, node_count]`.
    #[error("{relation} edge endpoint {node} is outside 1..={node_count}")]
    NodeOutOfRange {
        /// The offending endpoint as supplied by the caller.
        node: usize,
        /// Number of nodes declared for the graph.
        node_count: usize,
        /// Relation the edge was being added to.
        relation: Relation,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint was outside `[1, node_count]`.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
    }
}

/// An error produced while reading the `N M K` token stream.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying source failed.
    #[error("failed to read input: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// The header declared more nodes than the reader accepts.
    #[error("node count {node_count} exceeds the supported maximum of {limit}")]
    NodeCountTooLarge {
        /// Node count declared in the header.
        node_count: usize,
        /// Largest node count accepted.
        limit: usize,
    },
    /// The stream ended before all declared values were read.
    #[error("input ended early; expected {expected}")]
    MissingToken {
        /// Human-readable description of the missing value.
        expected: &'static str,
    },
    /// A token could not be parsed as the integer it must be.
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    InvalidInteger {
        /// The raw token.
        token: String,
        /// One-based position of the token in the stream.
        position: usize,
        /// Human-readable description of the expected value.
        expected: &'static str,
    },
    /// Tokens remained after the last declared edge.
    #[error("unexpected token at position {position} after the last declared edge")]
    TrailingInput {
        /// One-based position of the first surplus token.
        position: usize,
    },
    /// A declared edge referenced a node outside the graph.
    #[error("edge {edge}: {source}")]
    Edge {
        /// One-based index of the edge within its relation's block.
        edge: usize,
        /// Validation failure reported by the graph builder.
        #[source]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`InputError`] variants.
    enum InputErrorCode for InputError {
        /// Reading from the underlying source failed.
        Io => Io { .. } => "INPUT_IO",
        /// The header declared more nodes than the reader accepts.
        NodeCountTooLarge => NodeCountTooLarge { .. } => "INPUT_NODE_COUNT_TOO_LARGE",
        /// The stream ended before all declared values were read.
        MissingToken => MissingToken { .. } => "INPUT_MISSING_TOKEN",
        /// A token could not be parsed as an integer.
        InvalidInteger => InvalidInteger { .. } => "INPUT_INVALID_INTEGER",
        /// Tokens remained after the last declared edge.
        TrailingInput => TrailingInput { .. } => "INPUT_TRAILING_TOKENS",
        /// A declared edge referenced a node outside the graph.
        InvalidEdge => Edge { .. } => "INPUT_INVALID_EDGE",
    }
}

impl InputError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from edge
    /// validation.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Edge { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
