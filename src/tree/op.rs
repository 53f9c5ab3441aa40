use std::fmt;

/// How many operands an operator reads during evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Reads `left` then `right`.
    Binary,
    /// Reads only `right`. A present `left` is kept and mutated but never evaluated.
    Unary,
}

/// The fixed operator set.
///
/// Declaration order is the draw order used by the mutator: a uniform index in `0..18` selects
/// `Op::ALL[index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `left + right`
    Add,
    /// `left - right`
    Sub,
    /// `left * right`
    Mul,
    /// `left / right`, IEEE semantics on zero divisors.
    Div,
    /// Floating-point remainder of `left` by `right`.
    Mod,
    /// Smaller operand.
    Min,
    /// Larger operand.
    Max,
    /// Bitwise AND of the 64-bit patterns.
    And,
    /// Bitwise OR of the 64-bit patterns.
    Or,
    /// Bitwise XOR of the 64-bit patterns.
    Xor,
    /// `|right|`
    Abs,
    /// `right` rounded to the nearest integer, halves away from zero.
    Round,
    /// `e^right`
    Expt,
    /// Natural logarithm of `right`.
    Log,
    /// `(sin(12 * right) + 1) / 2`
    Sin,
    /// `(cos(12 * right) + 1) / 2`
    Cos,
    /// `atan(12 * right)`, not rescaled.
    ATan,
    /// Bitwise complement of the 64-bit pattern of `right`.
    Invert,
}

impl Op {
    /// Every operator in draw order.
    pub const ALL: [Op; 18] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Mod,
        Op::Min,
        Op::Max,
        Op::And,
        Op::Or,
        Op::Xor,
        Op::Abs,
        Op::Round,
        Op::Expt,
        Op::Log,
        Op::Sin,
        Op::Cos,
        Op::ATan,
        Op::Invert,
    ];

    /// Operator at `index` in [`Op::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Operand count used by evaluation.
    pub fn arity(self) -> Arity {
        match self {
            Op::Add
            | Op::Sub
            | Op::Mul
            | Op::Div
            | Op::Mod
            | Op::Min
            | Op::Max
            | Op::And
            | Op::Or
            | Op::Xor => Arity::Binary,
            Op::Abs
            | Op::Round
            | Op::Expt
            | Op::Log
            | Op::Sin
            | Op::Cos
            | Op::ATan
            | Op::Invert => Arity::Unary,
        }
    }

    /// Printed symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Mod => "Mod",
            Op::Min => "Min",
            Op::Max => "Max",
            Op::And => "And",
            Op::Or => "Or",
            Op::Xor => "Xor",
            Op::Abs => "Abs",
            Op::Round => "Round",
            Op::Expt => "Expt",
            Op::Log => "Log",
            Op::Sin => "Sin",
            Op::Cos => "Cos",
            Op::ATan => "aTan",
            Op::Invert => "Invert",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Free variable symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Var {
    /// Horizontal fragment coordinate.
    X,
    /// Vertical fragment coordinate.
    Y,
}

impl Var {
    /// Printed symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Var::X => "X",
            Var::Y => "Y",
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
