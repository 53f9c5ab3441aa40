//! Stateful front end: the [`engine::Engine`] that owns the current tree, its JSON
//! configuration, and the pointer gestures that drive it.

/// Engine settings and their JSON loader.
pub mod config;
/// Tree ownership, mutation commits and resets.
pub mod engine;
/// Pointer events and their mapping to engine actions.
pub mod gesture;
