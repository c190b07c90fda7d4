//! The compiled expression tree.

use crate::Box;
use crate::evaluator::operators::eval_binary_float;
use crate::parser::BinaryOp;
use core::fmt;

/// A compiled expression node.
///
/// Each node owns its children outright, so a tree is immutable once built
/// and can be shared across threads by reference. Evaluation walks it with a
/// plain `match`; nothing is allocated per call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value; ignores the accessor.
    Constant(f64),
    /// `x<index>`; evaluates to `vars(index)`.
    Variable(usize),
    /// `op left right`, with `left` the first-parsed operand.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate the tree, pulling variable values from `vars`.
    ///
    /// The left operand is evaluated completely before the right one, and
    /// `vars` is called once for every variable occurrence in the tree.
    pub fn eval<F>(&self, vars: &F) -> f64
    where
        F: Fn(usize) -> f64 + ?Sized,
    {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(index) => vars(*index),
            Expr::Binary { op, left, right } => {
                let left = left.eval(vars);
                let right = right.eval(vars);
                eval_binary_float(*op, left, right)
            }
        }
    }

    /// Highest variable index referenced by the tree, if any.
    pub fn max_variable_index(&self) -> Option<usize> {
        match self {
            Expr::Constant(_) => None,
            Expr::Variable(index) => Some(*index),
            Expr::Binary { left, right, .. } => {
                match (left.max_variable_index(), right.max_variable_index()) {
                    (Some(l), Some(r)) => Some(l.max(r)),
                    (l, r) => l.or(r),
                }
            }
        }
    }
}

/// Prints the canonical prefix form, which compiles back to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable(index) => write!(f, "x{}", index),
            Expr::Binary { op, left, right } => write!(f, "{} {} {}", op, left, right),
        }
    }
}
