//! Configuration options for compilation.

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use polcalc_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 64 };
/// let expr = polcalc_core::compile_with_options(&options, "+ 1 2").unwrap();
/// assert_eq!(expr.eval(&|_| 0.0), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct CompilationOptions {
    /// Maximum operator nesting depth (for recursion protection).
    ///
    /// The outermost operator sits at depth 0. Evaluation recurses exactly as
    /// deep as compilation does, so this bounds both.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}
