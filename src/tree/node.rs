use crate::tree::op::{Arity, Op, Var};

/// One node of an expression tree.
///
/// Each node owns its children. Operator children are optional only so a freshly built operator
/// can be handed to the mutator, which fills any gap before the tree is evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Constant scalar.
    Number(f64),
    /// Free variable bound to a fragment coordinate.
    Variable(Var),
    /// Operator applied to up to two subtrees.
    Operator {
        /// Operator symbol.
        op: Op,
        /// Left operand. Ignored by unary operators.
        left: Option<Box<Expr>>,
        /// Right operand.
        right: Option<Box<Expr>>,
    },
    /// Per-channel subtrees in red, green, blue order.
    Vector(Box<[Expr; 3]>),
}

impl Expr {
    /// Constant node.
    pub fn number(v: f64) -> Self {
        Self::Number(v)
    }

    /// Variable node.
    pub fn variable(var: Var) -> Self {
        Self::Variable(var)
    }

    /// Operator node; either child may be absent.
    pub fn operator(op: Op, left: Option<Expr>, right: Option<Expr>) -> Self {
        Self::Operator {
            op,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Operator node with both children present.
    pub fn binary(op: Op, left: Expr, right: Expr) -> Self {
        Self::operator(op, Some(left), Some(right))
    }

    /// Operator node with only a right child.
    pub fn unary(op: Op, right: Expr) -> Self {
        Self::operator(op, None, Some(right))
    }

    /// Vector node from its three channel subtrees.
    pub fn vector(r: Expr, g: Expr, b: Expr) -> Self {
        Self::Vector(Box::new([r, g, b]))
    }

    /// Startup tree: `Log(Y, X)`. Only `X` is read, since `Log` is unary.
    pub fn seed() -> Self {
        Self::binary(Op::Log, Self::variable(Var::Y), Self::variable(Var::X))
    }

    /// Tree installed by a reset gesture.
    pub fn reset_seed() -> Self {
        Self::number(0.0)
    }

    /// `true` when every operator carries the children its arity reads.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Number(_) | Self::Variable(_) => true,
            Self::Operator { op, left, right } => {
                let left_ok = match (op.arity(), left) {
                    (_, Some(l)) => l.is_well_formed(),
                    (Arity::Binary, None) => false,
                    (Arity::Unary, None) => true,
                };
                left_ok && right.as_deref().is_some_and(Expr::is_well_formed)
            }
            Self::Vector(ch) => ch.iter().all(Expr::is_well_formed),
        }
    }

    /// Level of the deepest node, counting the root as level 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 0,
            Self::Operator { left, right, .. } => {
                let l = left.as_deref().map_or(0, |n| n.depth() + 1);
                let r = right.as_deref().map_or(0, |n| n.depth() + 1);
                l.max(r)
            }
            Self::Vector(ch) => 1 + ch.iter().map(Expr::depth).max().unwrap_or(0),
        }
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::Operator { left, right, .. } => {
                1 + left.as_deref().map_or(0, Expr::node_count)
                    + right.as_deref().map_or(0, Expr::node_count)
            }
            Self::Vector(ch) => 1 + ch.iter().map(Expr::node_count).sum::<usize>(),
        }
    }

    /// Free the tree depth-first and report how many nodes were released.
    pub fn destroy(self) -> usize {
        let freed = self.node_count();
        drop(self);
        freed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/node.rs"]
mod tests;
