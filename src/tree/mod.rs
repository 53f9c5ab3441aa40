//! Expression tree model.
//!
//! A tree is a strict forest of owned nodes: every child has exactly one parent, so replacing or
//! dropping a subtree can never leave a dangling reference behind.

/// Tree nodes and constructors.
pub mod node;
/// Operator symbols and arity.
pub mod op;
