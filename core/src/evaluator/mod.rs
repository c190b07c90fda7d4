//! Evaluation of compiled expressions.
//!
//! The compiler produces an [`Expr`] tree. An [`Evaluator`] binds that tree to
//! a variable accessor so the expression can be recomputed with a plain
//! `evaluate()` call, as many times as needed.
//!
//! ## Design Principles
//!
//! - **Never fails**: Arithmetic follows IEEE 754, so division by zero yields
//!   inf or NaN instead of an error
//! - **Allocation-free**: Evaluation is a `match` walk over an owned tree
//! - **No hidden state**: Every call re-walks the tree and calls the accessor
//!   once per variable occurrence; nothing is cached between calls
//!
//! ## Example
//!
//! ```
//! use polcalc_core::build;
//!
//! let vars = [70.0, 30.0];
//! let calc = build("/ * x0 x1 + x0 x1", |i| vars[i]).unwrap();
//! assert_eq!(calc.evaluate(), 21.0);
//! ```

mod expr;
mod operators;


pub use expr::Expr;

/// A compiled expression bound to its variable accessor.
///
/// The accessor maps a variable index to its current value. It is never asked
/// for indices the expression does not reference, but the evaluator does not
/// check that those indices exist on the accessor's side.
#[derive(Clone)]
pub struct Evaluator<F> {
    expr: Expr,
    vars: F,
}

impl<F> Evaluator<F>
where
    F: Fn(usize) -> f64,
{
    pub fn new(expr: Expr, vars: F) -> Self {
        Self { expr, vars }
    }

    /// Recompute the expression with the accessor's current values.
    #[inline]
    pub fn evaluate(&self) -> f64 {
        self.expr.eval(&self.vars)
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Release the compiled tree, dropping the accessor.
    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl<F> core::fmt::Debug for Evaluator<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Evaluator")
            .field("expr", &self.expr)
            .finish_non_exhaustive()
    }
}
