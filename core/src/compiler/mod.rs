//! Compiler from prefix (Polish-notation) expressions to evaluator trees.
//!
//! ## Grammar
//!
//! ```text
//! expr      := operator " " expr " " expr | variable | constant
//! operator  := "+" | "-" | "*" | "/"
//! variable  := "x" digit+
//! constant  := decimal float literal
//! ```
//!
//! Terms are separated by exactly one space. Compilation either consumes the
//! whole input and yields an [`Expr`], or stops at the first problem and
//! yields a [`CompileError`] carrying the byte offset of that problem.
//!
//! ## Example
//!
//! ```
//! use polcalc_core::compiler::{CompileErrorKind, compile};
//!
//! let expr = compile("- 10 * 2 3").unwrap();
//! assert_eq!(expr.eval(&|_| 0.0), 4.0);
//!
//! let err = compile("+ 1 y").unwrap_err();
//! assert_eq!(err.kind, CompileErrorKind::InvalidTerm);
//! assert_eq!(err.position, 4);
//! ```

mod descent;
mod error;


pub use descent::Compiler;
pub use error::{CompileError, CompileErrorKind};

use crate::api::CompilationOptions;
use crate::evaluator::{Evaluator, Expr};
use tracing::debug;

/// Compile `expression` with default options.
pub fn compile(expression: &str) -> Result<Expr, CompileError> {
    compile_with_options(&CompilationOptions::default(), expression)
}

/// Compile `expression` with custom options.
pub fn compile_with_options(
    options: &CompilationOptions,
    expression: &str,
) -> Result<Expr, CompileError> {
    let result = Compiler::new(options).compile(expression);
    match &result {
        Ok(_) => debug!(len = expression.len(), "compiled expression"),
        Err(err) => debug!(
            len = expression.len(),
            position = err.position,
            "compilation failed: {}",
            err.kind
        ),
    }
    result
}

/// Compile `expression` and bind it to the variable accessor `vars`.
pub fn build<F>(expression: &str, vars: F) -> Result<Evaluator<F>, CompileError>
where
    F: Fn(usize) -> f64,
{
    build_with_options(&CompilationOptions::default(), expression, vars)
}

/// Compile `expression` with custom options and bind it to `vars`.
pub fn build_with_options<F>(
    options: &CompilationOptions,
    expression: &str,
    vars: F,
) -> Result<Evaluator<F>, CompileError>
where
    F: Fn(usize) -> f64,
{
    let expr = compile_with_options(options, expression)?;
    Ok(Evaluator::new(expr, vars))
}
