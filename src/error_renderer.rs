//! Error rendering using ariadne
//!
//! This module renders compile errors with source snippets and labels
//! pointing at the offending term.

use crate::{CompileError, CompileErrorKind, Severity};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use polcalc::{compile, render_error};
///
/// let source = "+ 1";
/// if let Err(e) = compile(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &CompileError, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(
    error: &CompileError,
    source: &str,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &CompileError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &CompileError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &CompileError,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.to_diagnostic(source);

    // Nothing to label in an empty source; fall back to the plain form.
    if source.is_empty() {
        return writeln!(writer, "{}", diag);
    }

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
    };

    let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
        .with_message(&diag.message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let label_message = match error.kind {
        CompileErrorKind::UnexpectedEndOfExpression => "expression ends here".to_string(),
        _ => diag.message.clone(),
    };
    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, diag.span.0.clone()))
            .with_message(label_message)
            .with_color(color),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn test_render_invalid_term() {
        let source = "+ 1 y";
        let err = compile(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Error"));
        assert!(output.contains("C003"));
        assert!(output.contains("Invalid term 'y'"));
        assert!(output.contains("+ 1 y"));
    }

    #[test]
    fn test_render_unexpected_end() {
        let source = "+ 1";
        let err = compile(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Unexpected end of expression"));
        assert!(output.contains("two operands"));
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_empty_source() {
        let err = compile("").unwrap_err();
        let output = render_error_to_string_no_color(&err, "");
        assert!(output.starts_with("error: Unexpected end of expression [C001]"));
    }

    #[test]
    fn test_render_non_ascii_term() {
        let source = "+ 1 ééé";
        let err = compile(source).unwrap_err();
        assert_eq!(err.position, 4);
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("Invalid term 'ééé'"));
        assert!(output.lines().any(|line| line.contains("+ 1 ééé")));
        let label_line = output
            .lines()
            .find(|line| line.contains("╰──"))
            .expect("label line");
        assert!(label_line.contains("Invalid term 'ééé'"));
    }

    #[test]
    fn test_render_non_ascii_continuation() {
        let source = "1 éé";
        let err = compile(source).unwrap_err();
        let output = render_error_to_string_no_color(&err, source);

        assert!(output.contains("C002"));
        assert!(output.lines().any(|line| line.contains("1 éé")));
    }

    #[test]
    fn test_render_non_ascii_label_stays_on_term() {
        let source = "+ é 1";
        let err = compile(source).unwrap_err();
        assert_eq!(err.position, 2);
        let output = render_error_to_string_no_color(&err, source);

        // A one-character term gets a one-column underline.
        let snippet = output
            .lines()
            .position(|line| line.contains("+ é 1"))
            .expect("snippet line");
        let underline = output.lines().nth(snippet + 1).expect("underline line");
        assert!(underline.contains("┬"));
        assert!(!underline.contains("─┬"));
        assert!(!underline.contains("┬─"));
    }

    #[test]
    fn test_render_to_writer() {
        let source = "1 2";
        let err = compile(source).unwrap_err();
        let mut buf = Vec::new();
        render_error_to(&err, source, &mut buf).unwrap();
        assert!(!buf.is_empty());
    }
}
