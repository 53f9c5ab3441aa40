//! Per-fragment evaluation of expression trees.

/// Corner sampling used to reject flat images.
pub mod degeneracy;
/// The pure tree evaluator.
pub mod evaluator;
