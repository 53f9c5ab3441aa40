//! Diagnostic text dumps of expression trees.

/// Token stream and line packing.
pub mod linearize;
