//! Property-based tests for component discovery and suggestion counting.
//!
//! Checks the counter against a breadth-first oracle and asserts the
//! structural invariants: count bounds, component sizes summing to the node
//! count, independence from edge order and direction, and idempotent
//! materialization.

mod oracle;
mod strategies;
mod types;
