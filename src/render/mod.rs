//! Per-pixel rendering of expression trees into a sample sink.
//!
//! The host application owns the window; this module only shades pixels and hands them over.

/// Frame and scanline rendering drivers.
pub mod driver;
/// Sample sink trait and built-in sinks.
pub mod sink;
