//! Term cutting and classification.
//!
//! An expression is a sequence of terms separated by exactly one space. The
//! compiler pulls terms off the front of its cursor with [`cut_term`] and
//! turns each one into a [`Term`] with [`Term::classify`]. Neither step keeps
//! any state; both only slice and inspect the input.

use crate::parser::BinaryOp;

/// Sigil that introduces a variable reference (`x0`, `x1`, ...).
pub const VARIABLE_SIGIL: char = 'x';

/// Term separator. No other whitespace is accepted between terms.
pub const SEPARATOR: char = ' ';

/// A classified term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    Operator(BinaryOp),
    Variable(usize),
    Constant(f64),
}

/// Split `cursor` into its first term and the remainder.
///
/// The single separator after the term is dropped. When there is no further
/// separator the whole cursor is the term and the remainder is empty.
pub fn cut_term(cursor: &str) -> (&str, &str) {
    cursor.split_once(SEPARATOR).unwrap_or((cursor, ""))
}

impl Term {
    /// Classify `text`, returning `None` for an invalid term.
    ///
    /// Operators are matched exactly. A term starting with the variable sigil
    /// must be followed by one or more decimal digits. Anything else must be a
    /// decimal floating-point literal (optional sign, digits, optional fraction,
    /// optional exponent).
    pub fn classify(text: &str) -> Option<Term> {
        if let Some(op) = BinaryOp::from_symbol(text) {
            return Some(Term::Operator(op));
        }
        if let Some(digits) = text.strip_prefix(VARIABLE_SIGIL) {
            return parse_index(digits).map(Term::Variable);
        }
        parse_constant(text).map(Term::Constant)
    }
}

fn parse_index(digits: &str) -> Option<usize> {
    // `usize::from_str` tolerates a leading `+`; the grammar does not.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_constant(text: &str) -> Option<f64> {
    // Keeps `inf`, `NaN` and friends out; they parse as f64 but are not literals.
    // Out-of-range literals such as `1e400` are rejected rather than rounded to inf.
    let is_literal_char =
        |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E');
    if text.is_empty() || !text.bytes().all(is_literal_char) {
        return None;
    }
    text.parse().ok().filter(|value: &f64| value.is_finite())
}
