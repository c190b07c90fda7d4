mod syntax;
pub mod term;

pub use syntax::{BinaryOp, Span};
pub use term::{SEPARATOR, Term, VARIABLE_SIGIL, cut_term};
