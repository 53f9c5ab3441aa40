use std::fmt;

use crate::tree::node::Expr;

/// Flatten a tree into display tokens.
///
/// Operators print infix inside parentheses, vectors as `#[r,g,b]`. The output is for humans
/// only; nothing parses it back.
pub fn linearize(node: &Expr) -> Vec<String> {
    let mut out = Vec::with_capacity(node.node_count() * 2);
    push_tokens(node, &mut out);
    out
}

fn push_tokens(node: &Expr, out: &mut Vec<String>) {
    match node {
        Expr::Number(v) => out.push(v.to_string()),
        Expr::Variable(var) => out.push(var.symbol().to_string()),
        Expr::Operator { op, left, right } => {
            out.push("(".to_string());
            if let Some(l) = left {
                push_tokens(l, out);
            }
            out.push(op.symbol().to_string());
            if let Some(r) = right {
                push_tokens(r, out);
            }
            out.push(")".to_string());
        }
        Expr::Vector(ch) => {
            out.push("#[".to_string());
            for (i, c) in ch.iter().enumerate() {
                if i > 0 {
                    out.push(",".to_string());
                }
                push_tokens(c, out);
            }
            out.push("]".to_string());
        }
    }
}

/// Pack tokens into at most `max_lines` text lines of `per_line` tokens each.
///
/// The last line takes whatever is left over, however long. Tokens are joined without
/// separators.
pub fn debug_lines(tokens: &[String], per_line: usize, max_lines: usize) -> Vec<String> {
    if per_line == 0 || max_lines == 0 {
        return vec![tokens.concat()];
    }
    let mut lines: Vec<String> = Vec::new();
    for (n, tok) in tokens.iter().enumerate() {
        let line = (n / per_line).min(max_lines - 1);
        if line == lines.len() {
            lines.push(String::new());
        }
        lines[line].push_str(tok);
    }
    lines
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tok in linearize(self) {
            f.write_str(&tok)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/print/linearize.rs"]
mod tests;
