//! Compilation errors.

use crate::api::{Diagnostic, Severity};
use crate::parser::{Span, cut_term};
use crate::{String, ToString, Vec, format, vec};
use thiserror::Error;

/// What went wrong while compiling an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    /// A term was required but the expression had already ended.
    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression,

    /// A complete expression was compiled but input remained.
    #[error("unexpected continuation of expression")]
    UnexpectedContinuationOfExpression,

    /// Neither an operator, a variable reference nor a decimal constant.
    #[error("invalid term")]
    InvalidTerm,

    /// Operators are nested deeper than `CompilationOptions::max_depth`.
    #[error("expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },
}

/// A [`CompileErrorKind`] together with the byte offset where it was found.
///
/// Errors returned from the public entry points are positioned relative to
/// the full expression. Inside the recursive descent each frame reports
/// positions relative to its own cursor, and the caller shifts them with
/// [`CompileError::offset_by`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct CompileError {
    #[source]
    pub kind: CompileErrorKind,
    pub position: usize,
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Translate a position relative to a sub-cursor into one relative to a
    /// cursor that started `consumed` bytes earlier.
    pub fn offset_by(self, consumed: usize) -> Self {
        Self {
            position: self.position + consumed,
            ..self
        }
    }

    /// Source range the error points at within `source`.
    ///
    /// Covers the offending term, the whole unconsumed tail for a continuation
    /// error, or an empty range for an unexpected end.
    pub fn span(&self, source: &str) -> Span {
        let start = self.position.min(source.len());
        let end = match self.kind {
            CompileErrorKind::UnexpectedEndOfExpression => start,
            CompileErrorKind::UnexpectedContinuationOfExpression => source.len(),
            CompileErrorKind::InvalidTerm | CompileErrorKind::MaxDepthExceeded { .. } => {
                let term = source.get(start..).map_or("", |rest| cut_term(rest).0);
                start + term.len()
            }
        };
        Span::new(start, end)
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span(source);
        let (message, code, help): (String, &str, Vec<String>) = match self.kind {
            CompileErrorKind::UnexpectedEndOfExpression => (
                "Unexpected end of expression".to_string(),
                "C001",
                vec!["Every operator needs exactly two operands".to_string()],
            ),
            CompileErrorKind::UnexpectedContinuationOfExpression => (
                "Unexpected continuation of expression".to_string(),
                "C002",
                vec![
                    "The expression is already complete here; remove the trailing terms"
                        .to_string(),
                ],
            ),
            CompileErrorKind::InvalidTerm if span.0.is_empty() => (
                "Empty term".to_string(),
                "C003",
                vec!["Terms are separated by exactly one space".to_string()],
            ),
            CompileErrorKind::InvalidTerm => (
                format!("Invalid term '{}'", span.str_of(source)),
                "C003",
                vec![
                    "Terms are operators (+ - * /), variables (x0, x1, ...) or decimal numbers"
                        .to_string(),
                ],
            ),
            CompileErrorKind::MaxDepthExceeded { max_depth } => (
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                "C004",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span,
            help,
            code: Some(code.to_string()),
        }
    }
}
