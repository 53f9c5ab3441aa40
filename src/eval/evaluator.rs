use crate::{
    foundation::core::{Channel, FragCoord},
    foundation::math::{bit_and, bit_not, bit_or, bit_xor},
    tree::node::Expr,
    tree::op::{Arity, Op, Var},
};

/// Everything one evaluation reads besides the tree itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalCtx {
    /// Fragment coordinate bound to `X` and `Y`.
    pub frag: FragCoord,
    /// Slot resolved when a vector node is reached.
    pub channel: Channel,
}

impl EvalCtx {
    /// Build a context from raw coordinates.
    pub fn new(x: f64, y: f64, channel: Channel) -> Self {
        Self {
            frag: FragCoord::new(x, y),
            channel,
        }
    }
}

/// Evaluate `node` at one fragment for one channel.
///
/// Pure and total over well-formed trees. Division by zero, logarithms of non-positive values and
/// friends yield IEEE infinities or NaN instead of failing. An operator missing an operand it
/// reads evaluates to NaN.
pub fn evaluate(node: &Expr, ctx: &EvalCtx) -> f64 {
    evaluate_observed(node, ctx, &mut |_: &Expr| {})
}

/// [`evaluate`] with a callback invoked on every node as it is entered.
///
/// Children are entered left before right, and unread subtrees (other vector slots, the left
/// operand of unary operators) are never entered.
pub fn evaluate_observed<F>(node: &Expr, ctx: &EvalCtx, on_visit: &mut F) -> f64
where
    F: FnMut(&Expr),
{
    on_visit(node);
    match node {
        Expr::Number(v) => *v,
        Expr::Variable(Var::X) => ctx.frag.x,
        Expr::Variable(Var::Y) => ctx.frag.y,
        Expr::Vector(ch) => evaluate_observed(&ch[ctx.channel.index()], ctx, on_visit),
        Expr::Operator { op, left, right } => {
            let mut operand = |child: &Option<Box<Expr>>| match child.as_deref() {
                Some(c) => evaluate_observed(c, ctx, on_visit),
                None => f64::NAN,
            };
            match op.arity() {
                Arity::Binary => {
                    let l = operand(left);
                    let r = operand(right);
                    binary(*op, l, r)
                }
                Arity::Unary => unary(*op, operand(right)),
            }
        }
    }
}

/// All three channels at one fragment, in red, green, blue order.
pub fn evaluate_rgb(node: &Expr, frag: FragCoord) -> [f64; 3] {
    Channel::ALL.map(|channel| evaluate(node, &EvalCtx { frag, channel }))
}

fn binary(op: Op, l: f64, r: f64) -> f64 {
    match op {
        Op::Add => l + r,
        Op::Sub => l - r,
        Op::Mul => l * r,
        Op::Div => l / r,
        Op::Mod => l % r,
        // Comparison-based: a NaN `left` comes back as is, a NaN `right` yields `left`.
        Op::Min => {
            if r < l {
                r
            } else {
                l
            }
        }
        Op::Max => {
            if l < r {
                r
            } else {
                l
            }
        }
        Op::And => bit_and(l, r),
        Op::Or => bit_or(l, r),
        Op::Xor => bit_xor(l, r),
        // Unary operators never reach here.
        _ => f64::NAN,
    }
}

fn unary(op: Op, v: f64) -> f64 {
    match op {
        Op::Abs => v.abs(),
        Op::Round => v.round(),
        Op::Expt => v.exp(),
        Op::Log => v.ln(),
        Op::Sin => ((v * 12.0).sin() + 1.0) / 2.0,
        Op::Cos => ((v * 12.0).cos() + 1.0) / 2.0,
        Op::ATan => (v * 12.0).atan(),
        Op::Invert => bit_not(v),
        // Binary operators never reach here.
        _ => f64::NAN,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
