//! Recursive-descent compilation of prefix expressions.

use crate::api::CompilationOptions;
use crate::compiler::{CompileError, CompileErrorKind::*};
use crate::evaluator::Expr;
use crate::parser::{Term, cut_term};
use tracing::trace;

/// Compiles one expression string into an [`Expr`] tree.
///
/// The cursor (the unconsumed part of the input) is threaded through the
/// recursion by value. Each frame reports error positions relative to the
/// cursor it was given; callers shift them by the number of bytes they had
/// consumed before recursing, so the entry point sees offsets into the full
/// expression.
pub struct Compiler<'opts> {
    options: &'opts CompilationOptions,
}

impl<'opts> Compiler<'opts> {
    pub fn new(options: &'opts CompilationOptions) -> Self {
        Self { options }
    }

    /// Compile the whole of `expression`, rejecting any leftover input.
    pub fn compile(&self, expression: &str) -> Result<Expr, CompileError> {
        let (expr, rest) = self.compile_expr(expression, 0)?;
        if !rest.is_empty() {
            return Err(CompileError::new(
                UnexpectedContinuationOfExpression,
                expression.len() - rest.len(),
            ));
        }
        Ok(expr)
    }

    /// Compile one complete sub-expression from the front of `cursor`.
    ///
    /// `depth` is the number of operators enclosing this sub-expression.
    /// Returns the tree and the remaining cursor.
    fn compile_expr<'src>(
        &self,
        cursor: &'src str,
        depth: usize,
    ) -> Result<(Expr, &'src str), CompileError> {
        if cursor.is_empty() {
            return Err(CompileError::new(UnexpectedEndOfExpression, 0));
        }

        let (text, rest) = cut_term(cursor);
        let term = Term::classify(text).ok_or(CompileError::new(InvalidTerm, 0))?;
        trace!(term = text, depth, "classified term");

        match term {
            Term::Constant(value) => Ok((Expr::Constant(value), rest)),
            Term::Variable(index) => Ok((Expr::Variable(index), rest)),
            Term::Operator(op) => {
                if depth >= self.options.max_depth {
                    return Err(CompileError::new(
                        MaxDepthExceeded {
                            max_depth: self.options.max_depth,
                        },
                        0,
                    ));
                }

                let consumed = cursor.len() - rest.len();
                let (left, rest) = self
                    .compile_expr(rest, depth + 1)
                    .map_err(|err| err.offset_by(consumed))?;

                let consumed = cursor.len() - rest.len();
                let (right, rest) = self
                    .compile_expr(rest, depth + 1)
                    .map_err(|err| err.offset_by(consumed))?;

                Ok((Expr::binary(op, left, right), rest))
            }
        }
    }
}
