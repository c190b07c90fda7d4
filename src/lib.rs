//! polcalc - Polish-notation arithmetic compiled into reusable evaluators
//!
//! # Overview
//!
//! An expression is written in prefix notation with single spaces between
//! terms: operators (`+ - * /`), variables (`x0`, `x1`, ...) and decimal
//! constants. It is compiled once into an evaluator that can be called any
//! number of times. Each call reads the variables through an accessor
//! supplied by the host, so the same compiled expression follows values that
//! change between calls.
//!
//! # Quick Start
//!
//! ```
//! use polcalc::build;
//!
//! let vars = [70.0, 30.0];
//! // (x0 * x1) / (x0 + x1)
//! let calc = build("/ * x0 x1 + x0 x1", |i| vars[i]).unwrap();
//! assert_eq!(calc.evaluate(), 21.0);
//! ```
//!
//! # Errors
//!
//! Compilation stops at the first problem and reports its byte offset:
//!
//! ```
//! use polcalc::{CompileErrorKind, compile, render_error_to_string_no_color};
//!
//! let source = "+ 1 y";
//! let err = compile(source).unwrap_err();
//! assert_eq!(err.kind, CompileErrorKind::InvalidTerm);
//! assert_eq!(err.position, 4);
//!
//! let report = render_error_to_string_no_color(&err, source);
//! assert!(report.contains("Invalid term 'y'"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from polcalc_core
pub use polcalc_core::api::{CompilationOptions, Diagnostic, Severity};
pub use polcalc_core::compiler::{
    CompileError, CompileErrorKind, build, build_with_options, compile, compile_with_options,
};
pub use polcalc_core::evaluator::{Evaluator, Expr};
pub use polcalc_core::parser::{BinaryOp, Span};
