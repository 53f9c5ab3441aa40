use rand::Rng;

use crate::tree::{
    node::Expr,
    op::{Op, Var},
};

/// Deepest level the mutator rewrites. The root is level 0.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Structural events recorded during one mutation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationStats {
    /// Nodes entered within the depth bound.
    pub visited: usize,
    /// Absent operator children replaced by fresh numbers.
    pub filled_children: usize,
    /// Operator symbols redrawn.
    pub op_swaps: usize,
    /// Numbers promoted to vectors.
    pub promoted_to_vector: usize,
    /// Numbers promoted to variables.
    pub promoted_to_variable: usize,
    /// Numbers given a new value.
    pub rerolled: usize,
    /// Variables whose symbol was redrawn.
    pub variable_redraws: usize,
    /// Vectors collapsed into a single number.
    pub collapsed_vectors: usize,
    /// Nodes replaced by a fresh operator.
    pub tail_conversions: usize,
}

impl MutationStats {
    /// `true` when the pass changed the tree's shape, not just values or symbols.
    pub fn is_structural(&self) -> bool {
        self.filled_children
            + self.promoted_to_vector
            + self.promoted_to_variable
            + self.collapsed_vectors
            + self.tail_conversions
            > 0
    }
}

enum Flow {
    Done,
    Tail,
}

/// Depth-bounded random rewriter for expression trees.
#[derive(Clone, Copy, Debug)]
pub struct Mutator {
    max_depth: usize,
}

impl Default for Mutator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Mutator {
    /// Create a mutator that leaves nodes below `max_depth` untouched.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Deepest level this mutator rewrites.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Mutate a whole tree in place, starting at level 0.
    pub fn mutate<R: Rng + ?Sized>(&self, root: &mut Expr, rng: &mut R) -> MutationStats {
        let mut stats = MutationStats::default();
        self.mutate_at(root, 0, rng, &mut stats);
        stats
    }

    /// Mutate the subtree rooted at `node`, which sits at level `depth`.
    ///
    /// Returns without touching anything once `depth` exceeds the bound.
    pub fn mutate_at<R: Rng + ?Sized>(
        &self,
        node: &mut Expr,
        depth: usize,
        rng: &mut R,
        stats: &mut MutationStats,
    ) {
        self.visit(node, depth, false, rng, stats);
    }

    fn visit<R: Rng + ?Sized>(
        &self,
        node: &mut Expr,
        depth: usize,
        in_vector: bool,
        rng: &mut R,
        stats: &mut MutationStats,
    ) {
        if depth > self.max_depth {
            return;
        }
        stats.visited += 1;

        let flow = match node {
            Expr::Operator { .. } => self.mutate_operator(node, depth, rng, stats),
            Expr::Number(_) => mutate_number(node, in_vector, rng, stats),
            Expr::Variable(_) => mutate_variable(node, rng, stats),
            Expr::Vector(_) => self.mutate_vector(node, depth, rng, stats),
        };

        if matches!(flow, Flow::Tail) && rng.random_range(0..10) <= 2 {
            let left = fresh_number(rng);
            let right = fresh_number(rng);
            let op = random_op(rng);
            let old = std::mem::replace(node, Expr::binary(op, left, right));
            let freed = old.destroy();
            stats.tail_conversions += 1;
            tracing::trace!(depth, %op, freed, "converted node to operator");
        }
    }

    fn mutate_operator<R: Rng + ?Sized>(
        &self,
        node: &mut Expr,
        depth: usize,
        rng: &mut R,
        stats: &mut MutationStats,
    ) -> Flow {
        let Expr::Operator { op, left, right } = node else {
            return Flow::Done;
        };
        for child in [left, right] {
            match child {
                Some(c) => self.visit(c, depth + 1, false, rng, stats),
                None => {
                    *child = Some(Box::new(fresh_number(rng)));
                    stats.filled_children += 1;
                }
            }
        }
        if rng.random_range(0..10) <= 1 {
            *op = random_op(rng);
            stats.op_swaps += 1;
        }
        Flow::Done
    }

    fn mutate_vector<R: Rng + ?Sized>(
        &self,
        node: &mut Expr,
        depth: usize,
        rng: &mut R,
        stats: &mut MutationStats,
    ) -> Flow {
        if rng.random_range(0..2) != 0 {
            return Flow::Tail;
        }
        match rng.random_range(0..10) {
            0..=1 => {
                let collapsed = Expr::number(f64::from(rng.random_range(0..100u32)));
                let freed = std::mem::replace(node, collapsed).destroy();
                stats.collapsed_vectors += 1;
                tracing::trace!(depth, freed, "collapsed vector");
                Flow::Done
            }
            2..=3 => {
                if let Expr::Vector(channels) = node {
                    for c in channels.iter_mut() {
                        self.visit(c, depth + 1, true, rng, stats);
                    }
                }
                Flow::Done
            }
            _ => Flow::Tail,
        }
    }
}

fn mutate_number<R: Rng + ?Sized>(
    node: &mut Expr,
    in_vector: bool,
    rng: &mut R,
    stats: &mut MutationStats,
) -> Flow {
    if rng.random_range(0..2) != 0 {
        return Flow::Tail;
    }
    match rng.random_range(0..10) {
        // A vector slot never holds another vector; the draw degrades to a re-roll there.
        0..=2 if !in_vector => {
            let (r, g, b) = (fresh_number(rng), fresh_number(rng), fresh_number(rng));
            *node = Expr::vector(r, g, b);
            stats.promoted_to_vector += 1;
            Flow::Done
        }
        3..=5 => {
            *node = Expr::variable(random_var(rng));
            stats.promoted_to_variable += 1;
            Flow::Done
        }
        _ => {
            *node = fresh_number(rng);
            stats.rerolled += 1;
            Flow::Tail
        }
    }
}

fn mutate_variable<R: Rng + ?Sized>(
    node: &mut Expr,
    rng: &mut R,
    stats: &mut MutationStats,
) -> Flow {
    if rng.random_range(0..2) == 0 {
        // Outcome 2 is inert.
        let var = match rng.random_range(0..3) {
            0 => Some(Var::X),
            1 => Some(Var::Y),
            _ => None,
        };
        if let Some(var) = var {
            *node = Expr::variable(var);
            stats.variable_redraws += 1;
        }
    }
    Flow::Tail
}

/// Fresh constant `k / 100` with `k` uniform in `0..100`.
pub fn fresh_number<R: Rng + ?Sized>(rng: &mut R) -> Expr {
    Expr::number(f64::from(rng.random_range(0..100u32)) / 100.0)
}

/// Uniform draw over the whole operator set.
pub fn random_op<R: Rng + ?Sized>(rng: &mut R) -> Op {
    Op::ALL[rng.random_range(0..Op::ALL.len())]
}

fn random_var<R: Rng + ?Sized>(rng: &mut R) -> Var {
    if rng.random_range(0..2) == 0 {
        Var::X
    } else {
        Var::Y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mutate/mutator.rs"]
mod tests;
