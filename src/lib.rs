//! Eruption grows procedural images out of random expression trees.
//!
//! Each pixel is colored by evaluating a small formula over its normalized coordinates once per
//! color channel. Interaction mutates the formula; mutations whose image would be a single flat
//! color are rejected and retried. The public surface is engine-oriented:
//!
//! - Load an [`EngineConfig`] (or use the defaults)
//! - Create an [`Engine`] and feed it [`PointerEvent`]s, or call [`Engine::mutate`] directly
//! - Render the current tree into a [`SampleSink`], whole or a few rows at a time
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Per-fragment evaluation and the degeneracy filter.
pub mod eval;
/// Random mutation with reject-and-retry.
pub mod mutate;
/// Token dumps for debug text.
pub mod print;
/// Pixel loop and sample sinks.
pub mod render;
/// Engine, configuration and input gestures.
pub mod session;
/// The expression tree model.
pub mod tree;

pub use crate::foundation::core::{Canvas, Channel, FragCoord, Rgb8};
pub use crate::foundation::error::{EruptionError, EruptionResult};
pub use crate::foundation::math::ColorMode;

pub use crate::eval::degeneracy::{
    CORNERS, CornerReport, DegeneracyCheck, corner_samples, inspect_corners,
};
pub use crate::eval::evaluator::{EvalCtx, evaluate, evaluate_observed, evaluate_rgb};
pub use crate::mutate::mutator::{MutationStats, Mutator, fresh_number, random_op};
pub use crate::mutate::retry::{
    ExhaustedPolicy, Resolution, RetryOutcome, RetryPolicy, mutate_with_retry,
};
pub use crate::print::linearize::{debug_lines, linearize};
pub use crate::render::driver::{FrameStats, ScanlineRenderer, render_frame, render_rows, shade};
pub use crate::render::sink::{ImageSink, NullSink, Sample, SampleSink};
pub use crate::session::config::EngineConfig;
pub use crate::session::engine::{Engine, Interaction};
pub use crate::session::gesture::{Gesture, PointerEvent, PointerPhase, Screen};
pub use crate::tree::node::Expr;
pub use crate::tree::op::{Arity, Op, Var};
