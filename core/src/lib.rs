#![cfg_attr(not(test), no_std)]
//! Compiler from Polish-notation arithmetic to reusable evaluators.
//!
//! An expression such as `/ * x0 x1 + x0 x1` is parsed once into an
//! [`Expr`] tree. The tree is then evaluated as often as needed, each time
//! pulling variable values from a caller-supplied accessor.
//!
//! ```
//! let vars = [70.0, 30.0];
//! let calc = polcalc_core::build("/ * x0 x1 + x0 x1", |i| vars[i]).unwrap();
//! assert_eq!(calc.evaluate(), 21.0);
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod compiler;
pub mod evaluator;
pub mod parser;

pub use api::{CompilationOptions, Diagnostic, Severity};
pub use compiler::{
    CompileError, CompileErrorKind, build, build_with_options, compile, compile_with_options,
};
pub use evaluator::{Evaluator, Expr};
