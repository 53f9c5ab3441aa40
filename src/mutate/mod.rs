//! Random structural mutation of expression trees.
//!
//! [`mutator`] rewrites a tree in place; [`retry`] wraps it in the reject-and-retry loop that
//! discards mutations whose image would be a single flat color.

/// Depth-bounded random rewriter.
pub mod mutator;
/// Mutation with the degeneracy filter applied.
pub mod retry;
