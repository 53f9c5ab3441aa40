use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::{
    eval::evaluator::{EvalCtx, evaluate},
    foundation::core::{Channel, FragCoord, Rgb8},
    foundation::error::{EruptionError, EruptionResult},
    mutate::mutator::Mutator,
    mutate::retry::{Resolution, RetryOutcome, mutate_with_retry},
    print::linearize::{debug_lines, linearize},
    render::driver::{ScanlineRenderer, render_frame, shade},
    render::sink::SampleSink,
    session::config::EngineConfig,
    session::gesture::{Gesture, PointerEvent, Screen},
    tree::node::Expr,
};

/// Tokens per line of [`Engine::debug_lines`].
pub const DEBUG_TOKENS_PER_LINE: usize = 25;
/// Line cap of [`Engine::debug_lines`].
pub const DEBUG_MAX_LINES: usize = 4;

/// What [`Engine::handle_pointer`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// The tree was mutated (or kept, if every attempt was flat).
    Mutated(RetryOutcome),
    /// The tree was replaced by the reset seed.
    Reset {
        /// Nodes released from the old tree.
        freed: usize,
    },
}

/// Owner of the current expression tree and the random source that mutates it.
///
/// Readers (evaluation, printing, rendering) borrow the tree; only [`Engine::mutate`] and
/// [`Engine::reset`] replace it, and they do so in a single swap so a half-mutated tree is
/// never visible.
#[derive(Debug)]
pub struct Engine {
    root: Expr,
    config: EngineConfig,
    mutator: Mutator,
    rng: Pcg32,
    generation: u64,
}

impl Engine {
    /// Engine holding the default seed tree `log(Y, X)`.
    pub fn new(config: EngineConfig) -> EruptionResult<Self> {
        Self::with_root(Expr::seed(), config)
    }

    /// Engine holding `root`. Fails on invalid config or a malformed tree.
    pub fn with_root(root: Expr, config: EngineConfig) -> EruptionResult<Self> {
        config.validate()?;
        if !root.is_well_formed() {
            return Err(EruptionError::validation(
                "root tree is missing a required operand",
            ));
        }
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        tracing::debug!(seed = ?config.seed, nodes = root.node_count(), "engine ready");
        Ok(Self {
            root,
            mutator: config.mutator(),
            config,
            rng,
            generation: 0,
        })
    }

    /// Current tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of committed tree replacements.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Value of the current tree at `frag` for `channel`.
    pub fn evaluate(&self, frag: FragCoord, channel: Channel) -> f64 {
        evaluate(&self.root, &EvalCtx { frag, channel })
    }

    /// Color of the current tree at `frag`.
    pub fn sample_rgb(&self, frag: FragCoord) -> Rgb8 {
        shade(&self.root, frag, self.config.color_mode)
    }

    /// Mutate the tree, retrying while the result is flat.
    #[tracing::instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn mutate(&mut self) -> RetryOutcome {
        let policy = self.config.retry_policy();
        let (next, outcome) = mutate_with_retry(&self.root, &self.mutator, &policy, &mut self.rng);
        if outcome.resolution != Resolution::KeptPrevious {
            self.root = next;
            self.generation += 1;
        }
        outcome
    }

    /// Replace the tree with the constant `0` and release the old one.
    pub fn reset(&mut self) -> usize {
        let old = std::mem::replace(&mut self.root, Expr::reset_seed());
        let freed = old.destroy();
        self.generation += 1;
        tracing::debug!(freed, generation = self.generation, "tree reset");
        freed
    }

    /// Replace the tree with a caller-supplied one.
    pub fn replace_root(&mut self, root: Expr) -> EruptionResult<()> {
        if !root.is_well_formed() {
            return Err(EruptionError::validation(
                "root tree is missing a required operand",
            ));
        }
        self.root = root;
        self.generation += 1;
        Ok(())
    }

    /// Token stream of the current tree.
    pub fn linearize(&self) -> Vec<String> {
        linearize(&self.root)
    }

    /// On-screen debug text: up to four lines of 25 tokens.
    pub fn debug_lines(&self) -> Vec<String> {
        debug_lines(&self.linearize(), DEBUG_TOKENS_PER_LINE, DEBUG_MAX_LINES)
    }

    /// Route a pointer event to [`Engine::mutate`] or [`Engine::reset`].
    pub fn handle_pointer(&mut self, event: PointerEvent, screen: Screen) -> Option<Interaction> {
        match Gesture::classify(event, screen, self.config.reset_region)? {
            Gesture::Mutate => Some(Interaction::Mutated(self.mutate())),
            Gesture::Reset => Some(Interaction::Reset {
                freed: self.reset(),
            }),
        }
    }

    /// Render the current tree at the configured canvas size.
    pub fn render(&self, sink: &mut dyn SampleSink) -> EruptionResult<()> {
        render_frame(&self.root, self.config.canvas, self.config.color_mode, sink)
    }

    /// Progressive renderer sized to the configured canvas.
    pub fn scanline_renderer(&self) -> ScanlineRenderer {
        ScanlineRenderer::new(self.config.canvas, self.config.color_mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/engine.rs"]
mod tests;
