//! Public API surface shared by the compiler and its front ends.
//!
//! - [`CompilationOptions`] configures compilation limits.
//! - [`Diagnostic`] is the boundary representation of a compile error, used
//!   by renderers and tooling.

pub mod error;
pub mod options;

pub use error::{Diagnostic, Severity};
pub use options::CompilationOptions;
