//! Public diagnostic types.
//!
//! Compilation errors carry only a kind and a byte offset. At API boundaries
//! (renderers, tooling) they are converted into a [`Diagnostic`] that also
//! knows the offending span, a human-readable message and fix-it hints.

use crate::parser::Span;
use crate::{String, Vec};
use core::fmt;

/// A diagnostic message with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "C001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}
