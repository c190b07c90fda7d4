// Syntax structures shared by the term classifier, the compiler and diagnostics.

use core::fmt;
use core::ops::Range;

/// Byte range into the full expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// Empty span sitting at `offset`.
    pub fn point(offset: usize) -> Self {
        Self(offset..offset)
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// The fixed set of binary arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Look up the operator spelled exactly as `symbol`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_lookup_is_exact() {
        assert_eq!(BinaryOp::from_symbol("++"), None);
        assert_eq!(BinaryOp::from_symbol("+ "), None);
        assert_eq!(BinaryOp::from_symbol("-1"), None);
        assert_eq!(BinaryOp::from_symbol("^"), None);
    }

    #[test]
    fn test_span_str_of() {
        let source = "+ 1 y";
        assert_eq!(Span::new(4, 5).str_of(source), "y");
        assert_eq!(Span::point(5).str_of(source), "");
    }
}
