//! Binary operator implementations.

use crate::parser::BinaryOp;

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than panicking).
#[inline]
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right, // Division by zero produces inf
    }
}
