use crate::{
    eval::evaluator::{EvalCtx, evaluate},
    foundation::core::{Channel, FragCoord},
    tree::node::Expr,
};

/// Sample points used to judge whether an image is flat, in sampling order.
pub const CORNERS: [FragCoord; 4] = [
    FragCoord::new(0.0, 0.0),
    FragCoord::new(1.0, 0.0),
    FragCoord::new(0.0, 1.0),
    FragCoord::new(1.0, 1.0),
];

/// Equality test applied to the four corner samples of one channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneracyCheck {
    /// All four samples are equal. NaN compares equal to NaN, since both render the same byte.
    #[default]
    Strict,
    /// Left-associative `a == b == c == d`, where each intermediate boolean is promoted back to
    /// `0.0` or `1.0` before the next comparison. Rarely tests what it looks like it tests.
    Chained,
}

impl DegeneracyCheck {
    /// `true` when the four samples count as a strike.
    pub fn is_flat(self, [a, b, c, d]: [f64; 4]) -> bool {
        match self {
            Self::Strict => same(a, b) && same(a, c) && same(a, d),
            Self::Chained => {
                let ab = f64::from(u8::from(a == b));
                let abc = f64::from(u8::from(ab == c));
                abc == d
            }
        }
    }
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Corner samples and per-channel verdicts for one tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerReport {
    /// Samples scaled by 255, indexed by channel then corner.
    pub samples: [[f64; 4]; 3],
    /// Per-channel strike flags.
    pub strikes: [bool; 3],
}

impl CornerReport {
    /// Number of channels that struck.
    pub fn strike_count(&self) -> usize {
        self.strikes.iter().filter(|s| **s).count()
    }

    /// `true` when every channel struck, i.e. the mutation must be discarded.
    pub fn is_degenerate(&self) -> bool {
        self.strikes.iter().all(|s| *s)
    }
}

/// The four [`CORNERS`] of `root` for `channel`, scaled by 255.
pub fn corner_samples(root: &Expr, channel: Channel) -> [f64; 4] {
    CORNERS.map(|frag| evaluate(root, &EvalCtx { frag, channel }) * 255.0)
}

/// Sample every channel at the corners and apply `check`.
pub fn inspect_corners(root: &Expr, check: DegeneracyCheck) -> CornerReport {
    let samples = Channel::ALL.map(|ch| corner_samples(root, ch));
    let strikes = samples.map(|s| check.is_flat(s));
    CornerReport { samples, strikes }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/degeneracy.rs"]
mod tests;
